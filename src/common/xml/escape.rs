use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape the five XML special characters.
///
/// # Examples
///
/// ```
/// use slidecraft::common::xml::escape_xml;
/// assert_eq!(escape_xml("R&D <draft>"), "R&amp;D &lt;draft&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

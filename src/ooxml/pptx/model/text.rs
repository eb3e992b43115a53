/// Text frames, paragraphs and runs for shapes and table cells.
use crate::common::style::{Length, RGBColor};
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Character formatting of a run.
///
/// `None` means the property is inherited from the layout, master or
/// table style and is not written to the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// Latin typeface name
    pub name: Option<String>,
    /// Font size
    pub size: Option<Length>,
    /// Bold flag
    pub bold: Option<bool>,
    /// Italic flag
    pub italic: Option<bool>,
    /// Solid text color
    pub color: Option<RGBColor>,
}

impl Font {
    fn has_children(&self) -> bool {
        self.name.is_some() || self.color.is_some()
    }

    /// Write `a:rPr` for this font.
    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-US""#);
        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, size.centipoints())?;
        }
        if let Some(bold) = self.bold {
            write!(xml, r#" b="{}""#, u8::from(bold))?;
        }
        if let Some(italic) = self.italic {
            write!(xml, r#" i="{}""#, u8::from(italic))?;
        }
        xml.push_str(r#" dirty="0""#);

        if !self.has_children() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');

        // Fill precedes the typeface elements in CT_TextCharacterProperties
        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref name) = self.name {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(name))?;
        }

        xml.push_str("</a:rPr>");
        Ok(())
    }
}

/// The smallest unit of styled text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    text: String,
    font: Font,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:r>");
        self.font.write_xml(xml)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
        xml.push_str("</a:r>");
        Ok(())
    }
}

/// A paragraph: an ordered list of runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return it for styling.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        let idx = self.runs.len();
        self.runs.push(Run::new(text));
        &mut self.runs[idx]
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Whether any run's text equals `target` exactly.
    pub fn contains_run_text(&self, target: &str) -> bool {
        self.runs.iter().any(|run| run.text == target)
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        for run in &self.runs {
            run.write_xml(xml)?;
        }
        if self.runs.is_empty() {
            xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
        }
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The text-containing region of a shape or table cell.
///
/// A text frame always holds at least one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFrame {
    /// Create a text frame with a single empty paragraph.
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
        }
    }

    /// Create a text frame holding `text`, see [`TextFrame::set_text`].
    pub fn from_text(text: &str) -> Self {
        let mut frame = Self::new();
        frame.set_text(text);
        frame
    }

    /// Replace all content with `text`.
    ///
    /// Each line becomes a paragraph with a single unformatted run; an empty
    /// line becomes an empty paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text
            .split('\n')
            .map(|line| {
                let mut paragraph = Paragraph::new();
                if !line.is_empty() {
                    paragraph.add_run(line);
                }
                paragraph
            })
            .collect();
    }

    /// Text of all paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Append an empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let idx = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new());
        &mut self.paragraphs[idx]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    /// All runs in paragraph order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }

    /// All runs in paragraph order, mutably.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.paragraphs.iter_mut().flat_map(|p| p.runs.iter_mut())
    }

    /// Write the text body element.
    ///
    /// `tag` is `p:txBody` for shapes and `a:txBody` for table cells;
    /// `body_pr` is the complete `a:bodyPr` element.
    pub(crate) fn write_xml(&self, xml: &mut String, tag: &str, body_pr: &str) -> Result<()> {
        write!(xml, "<{}>", tag)?;
        xml.push_str(body_pr);
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }
        write!(xml, "</{}>", tag)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(frame: &TextFrame) -> String {
        let mut xml = String::new();
        frame.write_xml(&mut xml, "p:txBody", "<a:bodyPr/>").unwrap();
        xml
    }

    #[test]
    fn test_set_text_splits_lines() {
        let frame = TextFrame::from_text("Agenda\nResults");
        assert_eq!(frame.paragraphs().len(), 2);
        assert_eq!(frame.paragraphs()[0].runs().len(), 1);
        assert_eq!(frame.paragraphs()[1].text(), "Results");
        assert_eq!(frame.text(), "Agenda\nResults");
    }

    #[test]
    fn test_set_text_empty() {
        let frame = TextFrame::from_text("");
        assert_eq!(frame.paragraphs().len(), 1);
        assert!(frame.paragraphs()[0].runs().is_empty());
        assert_eq!(frame.runs().count(), 0);
    }

    #[test]
    fn test_set_text_discards_formatting() {
        let mut frame = TextFrame::new();
        frame.paragraphs_mut()[0].add_run("old").font_mut().bold = Some(true);
        frame.set_text("new");
        assert_eq!(frame.runs().next().unwrap().font(), &Font::default());
    }

    #[test]
    fn test_contains_run_text_is_exact() {
        let mut paragraph = Paragraph::new();
        paragraph.add_run("Hello ");
        paragraph.add_run("World");
        assert!(paragraph.contains_run_text("World"));
        assert!(!paragraph.contains_run_text("world"));
        assert!(!paragraph.contains_run_text("Hello World"));
        assert_eq!(paragraph.text(), "Hello World");
    }

    #[test]
    fn test_run_xml_unformatted() {
        let xml = render(&TextFrame::from_text("a < b"));
        assert_eq!(
            xml,
            concat!(
                "<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r>",
                r#"<a:rPr lang="en-US" dirty="0"/><a:t>a &lt; b</a:t>"#,
                "</a:r></a:p></p:txBody>"
            )
        );
    }

    #[test]
    fn test_run_xml_formatted() {
        let mut frame = TextFrame::from_text("Title");
        let font = frame.runs_mut().next().unwrap().font_mut();
        font.name = Some("Arial".to_string());
        font.size = Some(Length::from_pt(24.0));
        font.bold = Some(true);
        font.italic = Some(false);
        font.color = Some(RGBColor::BLACK);

        let xml = render(&frame);
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="2400" b="1" i="0" dirty="0">"#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="000000"/></a:solidFill><a:latin typeface="Arial"/>"#
        ));
    }

    #[test]
    fn test_empty_paragraph_xml() {
        let xml = render(&TextFrame::new());
        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#));
    }
}

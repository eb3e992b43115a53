//! XML text helpers used when rendering parts.

mod escape;

pub use escape::escape_xml;

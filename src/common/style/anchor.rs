use serde::{Deserialize, Serialize};

/// Vertical alignment of text inside a table cell or text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Value of the DrawingML `anchor` attribute.
    #[inline]
    pub fn as_xml_value(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_values() {
        assert_eq!(VerticalAnchor::Top.as_xml_value(), "t");
        assert_eq!(VerticalAnchor::Middle.as_xml_value(), "ctr");
        assert_eq!(VerticalAnchor::Bottom.as_xml_value(), "b");
    }
}

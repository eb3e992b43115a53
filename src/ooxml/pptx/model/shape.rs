/// Shapes placed on a slide.
use crate::common::style::{Length, RGBColor};
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::table::Table;
use super::text::TextFrame;

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapePreset {
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl AutoShapePreset {
    /// Value of `a:prstGeom/@prst`.
    pub fn as_xml_value(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Ellipse => "ellipse",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Ellipse => "Ellipse",
        }
    }
}

/// What a shape is, and the content it carries.
///
/// Text boxes and auto shapes own a text frame. Tables live in graphic
/// frames, which have no text frame of their own. Pictures carry neither.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    TextBox(TextFrame),
    AutoShape {
        preset: AutoShapePreset,
        fill: Option<RGBColor>,
        text_frame: TextFrame,
    },
    Table(Table),
    Picture {
        description: String,
        /// Relationship id of the image part, e.g. `rId2`
        rel_id: String,
    },
}

/// A visual element on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) left: Length,
    pub(crate) top: Length,
    pub(crate) width: Length,
    pub(crate) height: Length,
    pub(crate) kind: ShapeKind,
}

impl Shape {
    pub(crate) fn new(
        shape_id: u32,
        kind: ShapeKind,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> Self {
        let name = match &kind {
            ShapeKind::TextBox(_) => format!("Text Box {}", shape_id),
            ShapeKind::AutoShape { preset, .. } => {
                format!("{} {}", preset.display_name(), shape_id)
            },
            ShapeKind::Table(_) => format!("Table {}", shape_id),
            ShapeKind::Picture { .. } => format!("Picture {}", shape_id),
        };

        Self {
            shape_id,
            name,
            left,
            top,
            width,
            height,
            kind,
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn left(&self) -> Length {
        self.left
    }

    pub fn top(&self) -> Length {
        self.top
    }

    pub fn width(&self) -> Length {
        self.width
    }

    pub fn height(&self) -> Length {
        self.height
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Solid fill of an auto shape. Other kinds have no fill.
    pub fn fill(&self) -> Option<RGBColor> {
        match &self.kind {
            ShapeKind::AutoShape { fill, .. } => *fill,
            _ => None,
        }
    }

    /// Set or clear the solid fill of an auto shape.
    ///
    /// Returns `false`, leaving the shape unchanged, when it is not an auto shape.
    pub fn set_fill(&mut self, color: Option<RGBColor>) -> bool {
        match &mut self.kind {
            ShapeKind::AutoShape { fill, .. } => {
                *fill = color;
                true
            },
            _ => false,
        }
    }

    pub fn has_text_frame(&self) -> bool {
        self.text_frame().is_some()
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox(frame) => Some(frame),
            ShapeKind::AutoShape { text_frame, .. } => Some(text_frame),
            ShapeKind::Table(_) | ShapeKind::Picture { .. } => None,
        }
    }

    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::TextBox(frame) => Some(frame),
            ShapeKind::AutoShape { text_frame, .. } => Some(text_frame),
            ShapeKind::Table(_) | ShapeKind::Picture { .. } => None,
        }
    }

    pub fn has_table(&self) -> bool {
        matches!(self.kind, ShapeKind::Table(_))
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Write `a:xfrm` with the shape's offset and extent.
    fn write_xfrm(&self, xml: &mut String, prefix: &str) -> Result<()> {
        write!(xml, "<{}:xfrm>", prefix)?;
        write!(
            xml,
            r#"<a:off x="{}" y="{}"/>"#,
            self.left.emus(),
            self.top.emus()
        )?;
        write!(
            xml,
            r#"<a:ext cx="{}" cy="{}"/>"#,
            self.width.emus(),
            self.height.emus()
        )?;
        write!(xml, "</{}:xfrm>", prefix)?;
        Ok(())
    }

    fn write_cnv_pr(&self, xml: &mut String, descr: Option<&str>) -> Result<()> {
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}""#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        if let Some(descr) = descr {
            write!(xml, r#" descr="{}""#, escape_xml(descr))?;
        }
        xml.push_str("/>");
        Ok(())
    }

    /// Generate XML for this shape inside `p:spTree`.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox(frame) => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                self.write_cnv_pr(xml, None)?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml, "a")?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                frame.write_xml(
                    xml,
                    "p:txBody",
                    r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#,
                )?;
                xml.push_str("</p:sp>");
            },
            ShapeKind::AutoShape {
                preset,
                fill,
                text_frame,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                self.write_cnv_pr(xml, None)?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml, "a")?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    preset.as_xml_value()
                )?;
                if let Some(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                xml.push_str("</p:spPr>");

                text_frame.write_xml(
                    xml,
                    "p:txBody",
                    r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#,
                )?;
                xml.push_str("</p:sp>");
            },
            ShapeKind::Table(table) => {
                xml.push_str("<p:graphicFrame>");
                xml.push_str("<p:nvGraphicFramePr>");
                self.write_cnv_pr(xml, None)?;
                xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvGraphicFramePr>");

                self.write_xfrm(xml, "p")?;

                xml.push_str("<a:graphic>");
                xml.push_str(
                    r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
                );
                table.write_xml(xml)?;
                xml.push_str("</a:graphicData>");
                xml.push_str("</a:graphic>");
                xml.push_str("</p:graphicFrame>");
            },
            ShapeKind::Picture {
                description,
                rel_id,
            } => {
                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                self.write_cnv_pr(xml, Some(description.as_str()))?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, escape_xml(rel_id))?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml, "a")?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(kind: ShapeKind) -> Shape {
        Shape::new(
            4,
            kind,
            Length::from_emus(10),
            Length::from_emus(20),
            Length::from_emus(300),
            Length::from_emus(400),
        )
    }

    fn render(shape: &Shape) -> String {
        let mut xml = String::new();
        shape.write_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_capabilities() {
        let text = shape(ShapeKind::TextBox(TextFrame::from_text("x")));
        assert!(text.has_text_frame());
        assert!(!text.has_table());
        assert_eq!(text.name(), "Text Box 4");

        let table = shape(ShapeKind::Table(Table::new(
            1,
            1,
            Length::from_cm(1.0),
            Length::from_cm(1.0),
        )));
        assert!(!table.has_text_frame());
        assert!(table.has_table());
        assert_eq!(table.name(), "Table 4");

        let picture = shape(ShapeKind::Picture {
            description: "logo".to_string(),
            rel_id: "rId2".to_string(),
        });
        assert!(picture.text_frame().is_none());
        assert!(picture.table().is_none());
    }

    #[test]
    fn test_text_box_xml() {
        let xml = render(&shape(ShapeKind::TextBox(TextFrame::from_text("Hi"))));
        assert!(xml.starts_with("<p:sp><p:nvSpPr>"));
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Text Box 4"/><p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="10" y="20"/><a:ext cx="300" cy="400"/>"#));
        assert!(xml.contains("<a:t>Hi</a:t>"));
        assert!(xml.ends_with("</p:txBody></p:sp>"));
    }

    #[test]
    fn test_auto_shape_xml() {
        let xml = render(&shape(ShapeKind::AutoShape {
            preset: AutoShapePreset::Ellipse,
            fill: Some(RGBColor::new(0xFF, 0, 0)),
            text_frame: TextFrame::new(),
        }));
        assert!(xml.contains(r#"name="Ellipse 4""#));
        assert!(xml.contains(r#"<a:prstGeom prst="ellipse">"#));
        assert!(xml.contains(r#"<a:srgbClr val="FF0000"/>"#));
    }

    #[test]
    fn test_set_fill() {
        let mut ellipse = shape(ShapeKind::AutoShape {
            preset: AutoShapePreset::Ellipse,
            fill: None,
            text_frame: TextFrame::new(),
        });
        assert!(!render(&ellipse).contains("<a:solidFill>"));

        assert!(ellipse.set_fill(RGBColor::from_hex("00FF00")));
        assert_eq!(ellipse.fill(), Some(RGBColor::new(0, 0xFF, 0)));
        assert!(render(&ellipse).contains(r#"<a:srgbClr val="00FF00"/>"#));

        assert!(ellipse.set_fill(None));
        assert_eq!(ellipse.fill(), None);

        let mut text_box = shape(ShapeKind::TextBox(TextFrame::from_text("Hi")));
        assert!(!text_box.set_fill(Some(RGBColor::BLACK)));
        assert_eq!(text_box.fill(), None);
    }

    #[test]
    fn test_table_xml() {
        let xml = render(&shape(ShapeKind::Table(Table::new(
            2,
            2,
            Length::from_emus(300),
            Length::from_emus(400),
        ))));
        assert!(xml.starts_with("<p:graphicFrame>"));
        assert!(xml.contains(r#"<p:xfrm><a:off x="10" y="20"/>"#));
        assert!(xml.contains("<a:tbl>"));
        assert!(xml.ends_with("</a:graphic></p:graphicFrame>"));
    }

    #[test]
    fn test_picture_xml() {
        let xml = render(&shape(ShapeKind::Picture {
            description: "Q3 \"chart\"".to_string(),
            rel_id: "rId7".to_string(),
        }));
        assert!(xml.contains(r#"descr="Q3 &quot;chart&quot;""#));
        assert!(xml.contains(r#"<a:blip r:embed="rId7"/>"#));
    }
}

/// Slide model for PPTX presentations.
use crate::common::style::Length;
use crate::ooxml::error::Result;

use super::shape::{AutoShapePreset, Shape, ShapeKind};
use super::table::Table;
use super::text::TextFrame;

/// Shape id reserved for the slide's root group shape.
const ROOT_GROUP_ID: u32 = 1;

/// One page of a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Slide ID written to `p:sldIdLst`
    pub(crate) slide_id: u32,
    /// Relationship id from the presentation part to this slide
    pub(crate) rel_id: String,
    /// Shapes in z-order
    pub(crate) shapes: Vec<Shape>,
    pub(crate) modified: bool,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, rel_id: String) -> Self {
        Self {
            slide_id,
            rel_id,
            shapes: Vec::new(),
            modified: false,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn rel_id(&self) -> &str {
        &self.rel_id
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes
            .iter()
            .map(|s| s.shape_id)
            .max()
            .unwrap_or(ROOT_GROUP_ID)
            + 1
    }

    fn push_shape(
        &mut self,
        kind: ShapeKind,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut Shape {
        let shape = Shape::new(self.next_shape_id(), kind, left, top, width, height);
        let idx = self.shapes.len();
        self.shapes.push(shape);
        self.modified = true;
        &mut self.shapes[idx]
    }

    /// Add a text box holding `text`.
    pub fn add_text_box(
        &mut self,
        text: &str,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut Shape {
        let kind = ShapeKind::TextBox(TextFrame::from_text(text));
        self.push_shape(kind, left, top, width, height)
    }

    /// Add an auto shape with an empty text frame.
    pub fn add_auto_shape(
        &mut self,
        preset: AutoShapePreset,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut Shape {
        let kind = ShapeKind::AutoShape {
            preset,
            fill: None,
            text_frame: TextFrame::new(),
        };
        self.push_shape(kind, left, top, width, height)
    }

    /// Add a picture that references an image part by relationship id.
    pub fn add_picture(
        &mut self,
        description: &str,
        rel_id: &str,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut Shape {
        let kind = ShapeKind::Picture {
            description: description.to_string(),
            rel_id: rel_id.to_string(),
        };
        self.push_shape(kind, left, top, width, height)
    }

    /// Add a `rows` x `cols` table in a new graphic frame.
    ///
    /// The frame's width and height are split evenly between columns and rows.
    /// The table itself is reached through [`Shape::table_mut`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slidecraft::common::Length;
    /// use slidecraft::ooxml::pptx::Presentation;
    ///
    /// let mut pres = Presentation::new();
    /// let slide = pres.add_slide();
    /// let frame = slide.add_table(2, 3, Length::from_cm(1.0), Length::from_cm(1.0),
    ///     Length::from_cm(12.0), Length::from_cm(3.0));
    /// if let Some(table) = frame.table_mut() {
    ///     table.cell_mut(1, 2)?.set_text("total");
    /// }
    /// assert_eq!(slide.shape_count(), 1);
    /// # Ok::<(), slidecraft::PptxError>(())
    /// ```
    pub fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut Shape {
        let kind = ShapeKind::Table(Table::new(rows, cols, width, height));
        self.push_shape(kind, left, top, width, height)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Mutable access to the shapes; marks the slide as modified.
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        self.modified = true;
        &mut self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Generate the slide part (`ppt/slides/slideN.xml`).
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.write_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cm(v: f64) -> Length {
        Length::from_cm(v)
    }

    #[test]
    fn test_shape_ids_are_unique() {
        let mut slide = Slide::new(256, "rId2".to_string());
        slide.add_text_box("a", cm(1.0), cm(1.0), cm(5.0), cm(1.0));
        slide.add_auto_shape(AutoShapePreset::Rectangle, cm(1.0), cm(3.0), cm(5.0), cm(1.0));
        slide.add_table(2, 2, cm(1.0), cm(5.0), cm(5.0), cm(2.0));

        let ids: Vec<u32> = slide.shapes().iter().map(Shape::shape_id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(slide.is_modified());
    }

    #[test]
    fn test_add_table_geometry() {
        let mut slide = Slide::new(256, "rId2".to_string());
        let table = slide
            .add_table(4, 2, cm(2.0), cm(3.0), cm(10.0), cm(4.0))
            .table_mut()
            .unwrap();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_widths()[0], cm(5.0));

        let shape = &slide.shapes()[0];
        assert!(shape.has_table());
        assert!(!shape.has_text_frame());
        assert_eq!(shape.name(), "Table 2");
        assert_eq!(shape.left(), cm(2.0));
        assert_eq!(shape.top(), cm(3.0));
        assert_eq!(shape.width(), cm(10.0));
        assert_eq!(shape.height(), cm(4.0));
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = Slide::new(256, "rId2".to_string());
        slide.add_text_box("Hello & welcome", cm(1.0), cm(1.0), cm(8.0), cm(2.0));
        slide.add_table(1, 1, cm(1.0), cm(4.0), cm(8.0), cm(2.0));

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains("<p:sld "));
        assert!(xml.contains("Hello &amp; welcome"));
        assert!(xml.contains("<p:graphicFrame>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}

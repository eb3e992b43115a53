//! Finding paragraphs and text frames by the exact text of a run.
//!
//! Traversal order is shapes in z-order, then paragraphs, then runs. Shapes
//! without a text frame (tables, pictures) are skipped. A run matches only
//! when its text equals the target exactly; the first match is returned.

use crate::ooxml::pptx::model::{Paragraph, Shape, Slide, TextFrame};

/// Paragraph holding the first run whose text is `target_text`.
///
/// # Examples
///
/// ```rust
/// use slidecraft::common::Length;
/// use slidecraft::ooxml::pptx::Presentation;
/// use slidecraft::ooxml::pptx::helpers::locate_paragraph;
///
/// let mut pres = Presentation::new();
/// let slide = pres.add_slide();
/// let cm = Length::from_cm;
/// slide.add_text_box("{{subtitle}}", cm(1.0), cm(1.0), cm(10.0), cm(2.0));
///
/// assert!(locate_paragraph(slide, "{{subtitle}}").is_some());
/// assert!(locate_paragraph(slide, "{{title}}").is_none());
/// ```
pub fn locate_paragraph<'a>(slide: &'a Slide, target_text: &str) -> Option<&'a Paragraph> {
    slide
        .shapes()
        .iter()
        .filter_map(Shape::text_frame)
        .flat_map(TextFrame::paragraphs)
        .find(|paragraph| paragraph.contains_run_text(target_text))
}

/// Mutable variant of [`locate_paragraph`].
///
/// The slide is marked as modified only when a paragraph is found.
pub fn locate_paragraph_mut<'a>(
    slide: &'a mut Slide,
    target_text: &str,
) -> Option<&'a mut Paragraph> {
    let Slide {
        shapes, modified, ..
    } = slide;
    let found = shapes
        .iter_mut()
        .filter_map(Shape::text_frame_mut)
        .flat_map(|frame| frame.paragraphs_mut().iter_mut())
        .find(|paragraph| paragraph.contains_run_text(target_text));
    *modified |= found.is_some();
    found
}

/// Text frame of the first shape holding a run whose text is `target_text`.
///
/// Useful when the whole frame, not one paragraph, is to be rewritten.
pub fn locate_shape<'a>(slide: &'a Slide, target_text: &str) -> Option<&'a TextFrame> {
    slide
        .shapes()
        .iter()
        .filter_map(Shape::text_frame)
        .find(|frame| has_run_text(frame, target_text))
}

/// Mutable variant of [`locate_shape`].
///
/// The slide is marked as modified only when a text frame is found.
pub fn locate_shape_mut<'a>(slide: &'a mut Slide, target_text: &str) -> Option<&'a mut TextFrame> {
    let Slide {
        shapes, modified, ..
    } = slide;
    let found = shapes
        .iter_mut()
        .filter_map(Shape::text_frame_mut)
        .find(|frame| has_run_text(frame, target_text));
    *modified |= found.is_some();
    found
}

fn has_run_text(frame: &TextFrame, target_text: &str) -> bool {
    frame
        .paragraphs()
        .iter()
        .any(|paragraph| paragraph.contains_run_text(target_text))
}

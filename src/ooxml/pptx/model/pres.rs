/// Presentation model for PPTX.
use crate::common::style::Length;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::slide::Slide;

/// Smallest slide id PowerPoint accepts in `p:sldIdLst`.
const MIN_SLIDE_ID: u32 = 256;

/// A PowerPoint presentation: an ordered deck of slides.
///
/// Slide order is the order of the presentation's slide-id list
/// (`p:sldIdLst`). Each slide keeps its id and relationship id when the
/// deck is reordered.
///
/// # Examples
///
/// ```rust
/// use slidecraft::ooxml::pptx::Presentation;
///
/// let mut pres = Presentation::new();
/// pres.add_slide();
/// pres.add_slide();
/// assert_eq!(pres.slide_ids(), vec![256, 257]);
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Slides in deck order
    pub(crate) slides: Vec<Slide>,
    slide_width: Length,
    slide_height: Length,
    /// Next free relationship number; `rId1` is the slide master
    next_rel_id: u32,
    modified: bool,
}

impl Presentation {
    /// Create a new empty presentation.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: Length::from_emus(9_144_000),
            slide_height: Length::from_emus(6_858_000),
            next_rel_id: 2,
            modified: false,
        }
    }

    /// Append a new empty slide and return it.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = self
            .slides
            .iter()
            .map(Slide::slide_id)
            .max()
            .map_or(MIN_SLIDE_ID, |id| id + 1);
        let rel_id = format!("rId{}", self.next_rel_id);
        self.next_rel_id += 1;

        let idx = self.slides.len();
        self.slides.push(Slide::new(slide_id, rel_id));
        self.modified = true;
        &mut self.slides[idx]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }

    /// Slide ids in deck order.
    pub fn slide_ids(&self) -> Vec<u32> {
        self.slides.iter().map(Slide::slide_id).collect()
    }

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: Length) {
        self.slide_width = width;
        self.modified = true;
    }

    pub fn slide_height(&self) -> Length {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: Length) {
        self.slide_height = height;
        self.modified = true;
    }

    pub(crate) fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Check if the presentation or any of its slides has been modified.
    pub fn is_modified(&self) -> bool {
        self.modified || self.slides.iter().any(Slide::is_modified)
    }

    /// Generate the presentation part (`ppt/presentation.xml`).
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for slide in &self.slides {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    slide.rel_id()
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width.emus(),
            self.slide_height.emus()
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

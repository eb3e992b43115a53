//! Slidecraft - helpers for filling PowerPoint templates from Rust
//!
//! The crate models a PowerPoint deck in memory (presentation, slides,
//! shapes, text frames, tables) and provides small helpers for the edits
//! that report generation needs most:
//!
//! - **Slide order**: delete a slide, move a slide
//! - **Keyword lookup**: find the paragraph or text frame holding a keyword run
//! - **Text replacement**: swap a keyword run for content, optionally styled
//! - **Tables**: build from tabular data, style a cell, merge cells, walk cells
//!
//! Every part renders to its PresentationML XML with `to_xml`.
//!
//! # Example
//!
//! ```rust
//! use slidecraft::common::Length;
//! use slidecraft::ooxml::pptx::{CellValue, Presentation, TableData};
//! use slidecraft::ooxml::pptx::helpers::{RunStyle, create_table, move_slide, run_text};
//!
//! # fn main() -> slidecraft::Result<()> {
//! let mut pres = Presentation::new();
//! let cm = Length::from_cm;
//!
//! pres.add_slide().add_text_box("{{title}}", cm(2.0), cm(2.0), cm(20.0), cm(3.0));
//! let summary = pres.add_slide();
//! summary.add_text_box("{{summary}}", cm(2.0), cm(1.0), cm(20.0), cm(2.0));
//!
//! let mut data = TableData::new(["Metric", "Value"]);
//! data.push_row([CellValue::from("Uptime"), CellValue::Float(99.95)])?;
//! create_table(summary, &data, 2.0, 4.0, 20.0, 3.0, true)?;
//!
//! if let Some(cover) = pres.slide_mut(0) {
//!     run_text(cover, "Monthly Report", "{{title}}", &RunStyle::new().with_bold())?;
//! }
//! move_slide(&mut pres, 1, 0)?;
//!
//! let presentation_xml = pres.to_xml()?;
//! let first_slide_xml = pres.slides()[0].to_xml()?;
//! assert!(presentation_xml.contains("<p:sldIdLst>"));
//! assert!(first_slide_xml.contains("99.95"));
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod ooxml;

pub use ooxml::error::{PptxError, Result};
pub use ooxml::pptx::helpers;
pub use ooxml::pptx::{
    CellValue, Paragraph, Presentation, Run, Shape, ShapeKind, Slide, Table, TableCell,
    TableData, TextFrame,
};

//! Convenience helpers for editing a deck built from a template.
//!
//! Each helper performs one local change on the object model:
//!
//! - [`delete_slide`] / [`move_slide`]: reorder the deck
//! - [`locate_paragraph`] / [`locate_shape`]: find text by keyword
//! - [`run_text`] / [`inject_text`]: replace keyword runs with content
//! - [`create_table`]: build a table from [`TableData`](super::TableData)
//! - [`bold_table_cell`] / [`merge_cells_horizontally`]: style and merge cells
//! - [`iter_cells`]: walk every cell of a table
//!
//! All indices are zero-based.
//!
//! # Example
//!
//! ```rust
//! use slidecraft::common::Length;
//! use slidecraft::ooxml::pptx::{CellValue, Presentation, TableData};
//! use slidecraft::ooxml::pptx::helpers::{
//!     CellStyle, RunStyle, bold_table_cell, create_table, merge_cells_horizontally, run_text,
//! };
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide();
//! let cm = Length::from_cm;
//! slide.add_text_box("{{heading}}", cm(1.0), cm(1.0), cm(20.0), cm(2.0));
//!
//! run_text(slide, "Sales by region", "{{heading}}", &RunStyle::new().with_font_size(32.0))?;
//!
//! let mut data = TableData::new(["Region", "Q1", "Q2"]);
//! data.push_row([CellValue::from("North"), CellValue::Int(120), CellValue::Int(135)])?;
//! let table = create_table(slide, &data, 1.0, 4.0, 20.0, 4.0, true)?;
//! merge_cells_horizontally(table, 1, 2, 0)?;
//! bold_table_cell(table, 0, 0, &CellStyle::new().with_bold())?;
//! # Ok::<(), slidecraft::PptxError>(())
//! ```

pub mod locate;
pub mod slides;
pub mod style;
pub mod table;
pub mod text;

pub use locate::{locate_paragraph, locate_paragraph_mut, locate_shape, locate_shape_mut};
pub use slides::{delete_slide, move_slide};
pub use style::{CellStyle, MatchPolicy, RunStyle, TableOptions};
pub use table::{
    bold_table_cell, create_table, create_table_with_options, iter_cells, iter_cells_mut,
    merge_cells_horizontally,
};
pub use text::{inject_text, run_text, run_text_with_policy};

//! PowerPoint (.pptx) presentation editing.
//!
//! - [`model`]: the slide deck object model and its XML rendering
//! - [`data`]: tabular input for table construction
//! - [`helpers`]: slide reordering, keyword lookup and replacement, tables
//!
//! # Example
//!
//! ```rust
//! use slidecraft::common::Length;
//! use slidecraft::ooxml::pptx::Presentation;
//! use slidecraft::ooxml::pptx::helpers::{delete_slide, locate_shape};
//!
//! let mut pres = Presentation::new();
//! let cm = Length::from_cm;
//! pres.add_slide().add_text_box("Draft", cm(1.0), cm(1.0), cm(5.0), cm(1.0));
//! pres.add_slide().add_text_box("Final", cm(1.0), cm(1.0), cm(5.0), cm(1.0));
//!
//! delete_slide(&mut pres, 0)?;
//! assert!(locate_shape(&pres.slides()[0], "Final").is_some());
//! # Ok::<(), slidecraft::PptxError>(())
//! ```

pub mod data;
pub mod helpers;
pub mod model;

pub use data::{CellValue, TableData};
pub use model::{
    AutoShapePreset, Font, Paragraph, Presentation, Run, Shape, ShapeKind, Slide, Table,
    TableCell, TableRow, TextFrame,
};

//! In-memory PresentationML object model.
//!
//! A [`Presentation`] owns an ordered list of [`Slide`]s; a slide owns
//! [`Shape`]s; text-bearing shapes own a [`TextFrame`] of paragraphs and
//! runs, and table shapes own a [`Table`] of cells. Each part renders to its
//! XML form with `to_xml`.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;

pub use pres::Presentation;
pub use shape::{AutoShapePreset, Shape, ShapeKind};
pub use slide::Slide;
pub use table::{Table, TableCell, TableRow};
pub use text::{Font, Paragraph, Run, TextFrame};

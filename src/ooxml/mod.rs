//! Office Open XML (OOXML) support.
//!
//! Only PresentationML is implemented: an editable slide-deck model and the
//! helpers built on it.

pub mod error;
pub mod pptx;

pub use error::{PptxError, Result};

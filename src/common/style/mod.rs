//! Common style and formatting types.

pub mod anchor;
pub mod color;
pub mod len;

pub use anchor::VerticalAnchor;
pub use color::RGBColor;
pub use len::Length;

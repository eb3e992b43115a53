//! Units, colors and XML helpers shared by the slide model and the helpers.

pub mod style;
pub mod unit;
pub mod xml;

pub use style::{Length, RGBColor, VerticalAnchor};

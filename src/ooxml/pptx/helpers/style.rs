//! Styling arguments for the helpers.
//!
//! Each struct has a `Default` that changes nothing beyond what the helper
//! always does, and can be loaded from YAML so that a deck template and its
//! styling can be configured outside the code.

use crate::common::style::{Length, VerticalAnchor};
use crate::ooxml::pptx::model::Font;
use serde::{Deserialize, Serialize};

#[cfg(feature = "yaml")]
use crate::ooxml::error::{PptxError, Result};

/// Which run receives a replacement when several carry the target text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// First run in shape, paragraph, run order
    First,
    /// Last run in shape, paragraph, run order
    #[default]
    Last,
}

/// Formatting applied to a run whose text is replaced.
///
/// `bold` and `italic` only ever switch formatting on; `false` leaves the
/// run's current setting alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunStyle {
    pub font: Option<String>,
    /// Font size in points
    pub font_size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
}

impl RunStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_font_size(mut self, points: f64) -> Self {
        self.font_size = Some(points);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub(crate) fn apply(&self, font: &mut Font) {
        if self.bold {
            font.bold = Some(true);
        }
        if self.italic {
            font.italic = Some(true);
        }
        if let Some(ref name) = self.font {
            font.name = Some(name.clone());
        }
        if let Some(points) = self.font_size {
            font.size = Some(Length::from_pt(points));
        }
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| PptxError::Yaml(e.to_string()))
    }
}

/// Formatting applied to every run of a table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub font: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub(crate) fn apply(&self, font: &mut Font) {
        if let Some(ref name) = self.font {
            font.name = Some(name.clone());
        }
        if self.bold {
            font.bold = Some(true);
        }
        if self.italic {
            font.italic = Some(true);
        }
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| PptxError::Yaml(e.to_string()))
    }
}

/// Options for building a table from [`TableData`](crate::ooxml::pptx::TableData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Put the column names in row 0
    pub header: bool,
    /// Apply the table style's header formatting to row 0
    pub first_row: bool,
    /// Apply alternating row bands
    pub band_row: bool,
    /// Vertical anchor of every cell
    pub anchor: VerticalAnchor,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            header: true,
            first_row: true,
            band_row: true,
            anchor: VerticalAnchor::Middle,
        }
    }
}

impl TableOptions {
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| PptxError::Yaml(e.to_string()))
    }
}

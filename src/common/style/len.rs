use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::unit::{
    EMUS_PER_CM, EMUS_PER_INCH, cm_to_emu_f64, emu_to_centipoints, emu_to_pt_f64,
    inch_to_emu_f64, pt_to_emu_f64,
};

/// Length measurement stored in EMUs.
///
/// Every position, extent and font size in the slide model is a `Length`.
///
/// # Examples
///
/// ```rust
/// use slidecraft::common::Length;
///
/// let left = Length::from_cm(2.0);
/// assert_eq!(left.emus(), 720_000);
///
/// let size = Length::from_pt(18.0);
/// assert_eq!(size.points(), 18.0);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Length {
    /// Value in EMUs (1 inch = 914,400 EMUs, 1 cm = 360,000 EMUs)
    emus: i64,
}

impl Length {
    pub const ZERO: Length = Length::from_emus(0);

    /// Create a length from EMUs (English Metric Units).
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self::from_emus(inch_to_emu_f64(inches))
    }

    /// Create a length from centimeters.
    ///
    /// Fractional EMUs are truncated.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self::from_emus(cm_to_emu_f64(cm))
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self::from_emus(pt_to_emu_f64(pt))
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to points.
    #[inline]
    pub fn points(&self) -> f64 {
        emu_to_pt_f64(self.emus)
    }

    /// Hundredths of a point, the unit of `a:rPr/@sz`.
    #[inline]
    pub fn centipoints(&self) -> i64 {
        emu_to_centipoints(self.emus)
    }

    /// Split this length into `parts` equal pieces, dropping the remainder.
    #[inline]
    pub(crate) fn split_even(&self, parts: usize) -> Length {
        if parts == 0 {
            return Length::ZERO;
        }
        Length::from_emus(self.emus / parts as i64)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}cm", self.cm())
    }
}

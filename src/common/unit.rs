//! Unit conversion utilities.
//!
//! PresentationML stores positions, sizes and font sizes in EMUs
//! (English Metric Units). Font sizes are written to XML in hundredths of a
//! point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_CENTIPOINT: i64 = 127;

#[inline]
pub fn cm_to_emu_f64(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64) as i64
}

#[inline]
pub fn inch_to_emu_f64(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Value of the `sz` attribute on `a:rPr` for a font size in EMUs.
#[inline]
pub fn emu_to_centipoints(emu: i64) -> i64 {
    emu / EMUS_PER_CENTIPOINT
}

//! Gray-level (luma) calculation using PAL weights.
//!
//! The same weighting feeds the gray histogram, monochrome conversion and the
//! change map, so all three agree on a pixel's intensity.

/// PAL weight for the red channel.
pub const LUMA_R: f64 = 0.222;

/// PAL weight for the green channel.
pub const LUMA_G: f64 = 0.707;

/// PAL weight for the blue channel.
pub const LUMA_B: f64 = 0.071;

/// Unrounded luma of an 8-bit RGB triple (0.0 to 255.0).
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Luma rounded to the nearest gray level.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    luma(r, g, b).round().clamp(0.0, 255.0) as u8
}

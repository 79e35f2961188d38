//! Source sampling shared by rotation and rescaling.

use super::Interpolation;
use crate::raster::Raster;

/// Mapped coordinates closer than this to an integer are treated as that
/// integer, so exact right angles and unit scales hit source pixels exactly.
const SNAP_EPSILON: f64 = 1e-9;

#[inline]
pub(crate) fn snap(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < SNAP_EPSILON {
        r
    } else {
        v
    }
}

/// Sample `raster` at a fractional coordinate. `None` means the destination
/// pixel stays untouched.
#[inline]
pub(crate) fn sample(raster: &Raster, x: f64, y: f64, method: Interpolation) -> Option<[u8; 4]> {
    match method {
        Interpolation::NearestNeighbor => sample_nearest(raster, x, y),
        Interpolation::Bilinear => sample_bilinear(raster, x, y),
    }
}

/// Round to the nearest source pixel.
pub(crate) fn sample_nearest(raster: &Raster, x: f64, y: f64) -> Option<[u8; 4]> {
    let (x, y) = (snap(x), snap(y));
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    raster.pixel_at(x.round() as i64, y.round() as i64)
}

/// Interpolate from the four surrounding pixels.
///
/// With `A = (⌊x⌋, ⌈y⌉)`, `B = (⌈x⌉, ⌈y⌉)`, `C = (⌊x⌋, ⌊y⌋)`, `D = (⌈x⌉, ⌊y⌋)`
/// and fractional parts `p`, `q`:
///
/// ```text
/// val = C + (D - C)·p + (A - C)·q + (B + C - A - D)·p·q
/// ```
///
/// Returns `None` if any of the four lies outside the raster.
pub(crate) fn sample_bilinear(raster: &Raster, x: f64, y: f64) -> Option<[u8; 4]> {
    let (x, y) = (snap(x), snap(y));
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let (x0, y0) = (x.floor(), y.floor());
    let (x1, y1) = (x.ceil(), y.ceil());
    let p = x - x0;
    let q = y - y0;

    let a = raster.pixel_at(x0 as i64, y1 as i64)?;
    let b = raster.pixel_at(x1 as i64, y1 as i64)?;
    let c = raster.pixel_at(x0 as i64, y0 as i64)?;
    let d = raster.pixel_at(x1 as i64, y0 as i64)?;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let (a, b, c, d) = (a[i] as f64, b[i] as f64, c[i] as f64, d[i] as f64);
        let v = c + (d - c) * p + (a - c) * q + (b + c - a - d) * p * q;
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    Some(out)
}

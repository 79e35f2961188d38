//! Arbitrary-angle rotation.
//!
//! The canvas is the bounding box of the rotated image corners. Two
//! renderers share it:
//!
//! - [`rotate`] walks the destination and maps each pixel back into the
//!   source with the inverse rotation, so the result has no holes.
//! - [`rotate_forward`] pushes each source pixel through the forward rotation
//!   and rounds. It is cheaper but leaves holes at most angles.
//!
//! For rotation by angle θ (degrees), with working angle `φ = -θ` and
//! `(minX, minY)` the top-left of the rotated corner box:
//! ```text
//! forward:  x' = x·cos φ - y·sin φ - minX
//!           y' = x·sin φ + y·cos φ - minY
//! inverse:  src_x = u·cos θ - v·sin θ,  u = x + minX
//!           src_y = u·sin θ + v·cos θ,  v = y + minY
//! ```

use super::sampling::{sample, snap};
use super::Interpolation;
use crate::error::{TransformError, TransformResult};
use crate::parallel::for_each_row_mut;
use crate::raster::{output_len, Raster, CHANNELS};

/// Canvas produced by rotating a `width x height` rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedBounds {
    pub width: u32,
    pub height: u32,
    /// Smallest rotated corner x; destination x = 0 sits here.
    pub min_x: f64,
    /// Smallest rotated corner y.
    pub min_y: f64,
}

/// Compute the bounding box of a rotated image.
///
/// Spans within `1e-9` of an integer are snapped before rounding up, so 90°
/// swaps the dimensions exactly and 0° keeps them.
///
/// # Errors
///
/// Returns `InvalidParameter` if a side exceeds `u32::MAX` or the canvas
/// byte size overflows `usize`.
pub fn rotated_bounds(
    width: u32,
    height: u32,
    angle_degrees: f64,
) -> TransformResult<RotatedBounds> {
    let phi = -angle_degrees.to_radians();
    let (sin, cos) = phi.sin_cos();
    let (w, h) = (width as f64, height as f64);

    let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in corners {
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    let span_x = snap(max_x - min_x).ceil().max(0.0);
    let span_y = snap(max_y - min_y).ceil().max(0.0);
    if span_x > u32::MAX as f64 || span_y > u32::MAX as f64 {
        return Err(TransformError::InvalidParameter(format!(
            "{width}x{height} rotated by {angle_degrees}° needs a {span_x}x{span_y} canvas"
        )));
    }
    let bounds = RotatedBounds {
        width: span_x as u32,
        height: span_y as u32,
        min_x,
        min_y,
    };
    output_len(bounds.width, bounds.height)?;
    Ok(bounds)
}

fn check_angle(angle_degrees: f64) -> TransformResult<()> {
    if angle_degrees.is_finite() {
        Ok(())
    } else {
        Err(TransformError::InvalidParameter(format!(
            "rotation angle must be finite, got {angle_degrees}"
        )))
    }
}

/// Rotate by `angle_degrees` using inverse mapping.
///
/// Destination pixels that map outside the source stay transparent black.
///
/// # Errors
///
/// Returns `InvalidParameter` for a NaN or infinite angle, or when the
/// canvas is too large to address.
pub fn rotate(
    raster: &Raster,
    angle_degrees: f64,
    method: Interpolation,
) -> TransformResult<Raster> {
    check_angle(angle_degrees)?;
    let bounds = rotated_bounds(raster.width(), raster.height(), angle_degrees)?;
    log::debug!(
        "rotate {}x{} by {}° ({:?}) -> {}x{}",
        raster.width(),
        raster.height(),
        angle_degrees,
        method,
        bounds.width,
        bounds.height
    );

    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let mut output = vec![0u8; output_len(bounds.width, bounds.height)?];
    for_each_row_mut(&mut output, bounds.width as usize * CHANNELS, |y, row| {
        let v = y as f64 + bounds.min_y;
        for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let u = x as f64 + bounds.min_x;
            let sx = u * cos - v * sin;
            let sy = u * sin + v * cos;
            if let Some(px) = sample(raster, sx, sy, method) {
                dst.copy_from_slice(&px);
            }
        }
    });
    Ok(Raster::from_parts(bounds.width, bounds.height, output))
}

/// Rotate by `angle_degrees` by scattering source pixels onto the canvas.
///
/// Collisions are won by the later source pixel in row-major order.
///
/// # Errors
///
/// Returns `InvalidParameter` for a NaN or infinite angle, or when the
/// canvas is too large to address.
pub fn rotate_forward(raster: &Raster, angle_degrees: f64) -> TransformResult<Raster> {
    check_angle(angle_degrees)?;
    let bounds = rotated_bounds(raster.width(), raster.height(), angle_degrees)?;
    log::debug!(
        "rotate_forward {}x{} by {}° -> {}x{}",
        raster.width(),
        raster.height(),
        angle_degrees,
        bounds.width,
        bounds.height
    );

    let phi = -angle_degrees.to_radians();
    let (sin, cos) = phi.sin_cos();
    let (out_w, out_h) = (bounds.width as i64, bounds.height as i64);
    let mut output = vec![0u8; output_len(bounds.width, bounds.height)?];

    for y in 0..raster.height() as usize {
        let src = raster.row(y);
        let fy = y as f64;
        for (x, px) in src.chunks_exact(CHANNELS).enumerate() {
            let fx = x as f64;
            let dx = snap(fx * cos - fy * sin - bounds.min_x).round() as i64;
            let dy = snap(fx * sin + fy * cos - bounds.min_y).round() as i64;
            if dx < 0 || dy < 0 || dx >= out_w || dy >= out_h {
                continue;
            }
            let idx = (dy as usize * bounds.width as usize + dx as usize) * CHANNELS;
            output[idx..idx + CHANNELS].copy_from_slice(px);
        }
    }
    Ok(Raster::from_parts(bounds.width, bounds.height, output))
}

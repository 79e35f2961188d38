//! Rescaling by a factor with nearest or bilinear sampling.

use super::sampling::sample;
use super::Interpolation;
use crate::error::{TransformError, TransformResult};
use crate::parallel::for_each_row_mut;
use crate::raster::{output_len, Raster, CHANNELS};

fn check_factor(name: &str, factor: f64) -> TransformResult<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(TransformError::InvalidParameter(format!(
            "{name} scale factor must be positive and finite, got {factor}"
        )))
    }
}

fn scaled_len(name: &str, len: u32, factor: f64) -> TransformResult<u32> {
    let scaled = (len as f64 * factor).round();
    if scaled < 1.0 || scaled > u32::MAX as f64 {
        return Err(TransformError::InvalidParameter(format!(
            "{name} of {len} scaled by {factor} gives an unusable size {scaled}"
        )));
    }
    Ok(scaled as u32)
}

/// Scale both axes by `factor`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `factor` is not positive and finite, or if
/// the scaled image would have no pixels or too many to address.
pub fn rescale(raster: &Raster, factor: f64, method: Interpolation) -> TransformResult<Raster> {
    rescale_axes(raster, factor, factor, method)
}

/// Scale the x axis by `fx` and the y axis by `fy`.
///
/// The output is `round(W·fx) x round(H·fy)`; destination `(x, y)` samples the
/// source at `(x / fx, y / fy)`. Samples past the source edge stay
/// transparent black.
///
/// # Errors
///
/// Same as [`rescale`], per axis.
pub fn rescale_axes(
    raster: &Raster,
    fx: f64,
    fy: f64,
    method: Interpolation,
) -> TransformResult<Raster> {
    check_factor("horizontal", fx)?;
    check_factor("vertical", fy)?;
    let out_w = scaled_len("width", raster.width(), fx)?;
    let out_h = scaled_len("height", raster.height(), fy)?;
    let len = output_len(out_w, out_h)?;
    log::debug!(
        "rescale {}x{} by ({}, {}) ({:?}) -> {}x{}",
        raster.width(),
        raster.height(),
        fx,
        fy,
        method,
        out_w,
        out_h
    );

    let mut output = vec![0u8; len];
    for_each_row_mut(&mut output, out_w as usize * CHANNELS, |y, row| {
        let sy = y as f64 / fy;
        for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
            if let Some(px) = sample(raster, x as f64 / fx, sy, method) {
                dst.copy_from_slice(&px);
            }
        }
    });
    Ok(Raster::from_parts(out_w, out_h, output))
}

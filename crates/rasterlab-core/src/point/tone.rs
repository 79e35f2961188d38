//! Tone operations: negative, monochrome, brightness/contrast, gamma and
//! piecewise-linear curves.

use super::apply_lut;
use crate::error::TransformResult;
use crate::luminance::luma_u8;
use crate::lut::Lut;
use crate::parallel::for_each_row_mut;
use crate::raster::Raster;
use crate::statistics::ImageStatistics;
use crate::ControlPoint;

/// Invert every colour channel.
pub fn negative(raster: &Raster) -> Raster {
    log::debug!("negative {}x{}", raster.width(), raster.height());
    apply_lut(raster, Lut::negative())
}

/// Convert to gray using PAL luma.
///
/// Fully transparent pixels are skipped and stay zero in the output; every
/// other pixel becomes opaque gray.
pub fn monochrome(raster: &Raster) -> Raster {
    log::debug!("monochrome {}x{}", raster.width(), raster.height());
    let mut output = vec![0u8; raster.pixels().len()];
    for_each_row_mut(&mut output, raster.stride(), |y, row| {
        let src = raster.row(y);
        for (dst, px) in row.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            if px[3] == 0 {
                continue;
            }
            let gray = luma_u8(px[0], px[1], px[2]);
            dst.copy_from_slice(&[gray, gray, gray, 255]);
        }
    });
    Raster::from_parts(raster.width(), raster.height(), output)
}

/// Linearly rescale levels so the result has the requested brightness and
/// contrast.
///
/// `stats` must describe `raster`; its brightness and contrast are the
/// starting point of the rescale.
///
/// # Errors
///
/// See [`Lut::brightness_contrast`]. A flat source (zero contrast) fails with
/// `DivisionByZero`.
pub fn adjust_brightness_contrast(
    raster: &Raster,
    stats: &ImageStatistics,
    brightness: f64,
    contrast: f64,
) -> TransformResult<Raster> {
    log::debug!(
        "brightness/contrast {}x{}: ({:.3}, {:.3}) -> ({:.3}, {:.3})",
        raster.width(),
        raster.height(),
        stats.brightness,
        stats.contrast,
        brightness,
        contrast
    );
    let lut = Lut::brightness_contrast(stats.brightness, stats.contrast, brightness, contrast)?;
    Ok(apply_lut(raster, &lut))
}

/// Apply `out = 255 * (in / 255)^gamma` to every colour channel.
pub fn gamma_correction(raster: &Raster, gamma: f64) -> TransformResult<Raster> {
    log::debug!("gamma {}x{}: {}", raster.width(), raster.height(), gamma);
    let lut = Lut::gamma(gamma)?;
    Ok(apply_lut(raster, &lut))
}

/// Remap levels through a piecewise-linear curve defined by control points.
pub fn piecewise_linear(raster: &Raster, points: &[ControlPoint]) -> TransformResult<Raster> {
    log::debug!(
        "piecewise linear {}x{}: {} points",
        raster.width(),
        raster.height(),
        points.len()
    );
    let lut = Lut::piecewise_linear(points)?;
    Ok(apply_lut(raster, &lut))
}

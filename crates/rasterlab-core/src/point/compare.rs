//! Two-image comparisons: absolute difference and thresholded change map.

use crate::error::TransformResult;
use crate::luminance::luma_u8;
use crate::parallel::for_each_row_mut;
use crate::raster::Raster;

/// Per-channel `|source - other|` on R, G and B; alpha comes from `source`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the rasters differ in size.
pub fn difference(source: &Raster, other: &Raster) -> TransformResult<Raster> {
    source.ensure_same_dimensions(other)?;
    log::debug!("difference {}x{}", source.width(), source.height());

    let mut output = vec![0u8; source.pixels().len()];
    for_each_row_mut(&mut output, source.stride(), |y, row| {
        let a = source.row(y);
        let b = other.row(y);
        for ((dst, pa), pb) in row
            .chunks_exact_mut(4)
            .zip(a.chunks_exact(4))
            .zip(b.chunks_exact(4))
        {
            dst[0] = pa[0].abs_diff(pb[0]);
            dst[1] = pa[1].abs_diff(pb[1]);
            dst[2] = pa[2].abs_diff(pb[2]);
            dst[3] = pa[3];
        }
    });
    Ok(Raster::from_parts(source.width(), source.height(), output))
}

/// Mark pixels whose luma changed by more than `threshold`.
///
/// Marked pixels take `highlight`; the rest keep the source pixel.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the rasters differ in size.
pub fn change_map(
    source: &Raster,
    other: &Raster,
    threshold: u8,
    highlight: [u8; 4],
) -> TransformResult<Raster> {
    source.ensure_same_dimensions(other)?;
    log::debug!(
        "change map {}x{}: threshold={}",
        source.width(),
        source.height(),
        threshold
    );

    let mut output = vec![0u8; source.pixels().len()];
    for_each_row_mut(&mut output, source.stride(), |y, row| {
        let a = source.row(y);
        let b = other.row(y);
        for ((dst, pa), pb) in row
            .chunks_exact_mut(4)
            .zip(a.chunks_exact(4))
            .zip(b.chunks_exact(4))
        {
            let diff = luma_u8(pa[0], pa[1], pa[2]).abs_diff(luma_u8(pb[0], pb[1], pb[2]));
            if diff > threshold {
                dst.copy_from_slice(&highlight);
            } else {
                dst.copy_from_slice(pa);
            }
        }
    });
    Ok(Raster::from_parts(source.width(), source.height(), output))
}

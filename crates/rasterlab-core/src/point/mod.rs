//! Point transforms: per-pixel remaps that never look at neighbours.
//!
//! Most operations build a [`Lut`] and push every colour channel through it,
//! leaving alpha untouched. Histogram-driven operations take the source's
//! [`ImageStatistics`](crate::ImageStatistics) so statistics are computed once
//! per raster rather than once per transform.

mod compare;
mod histogram_ops;
mod tone;

pub use compare::{change_map, difference};
pub use histogram_ops::{equalize, match_histogram};
pub use tone::{
    adjust_brightness_contrast, gamma_correction, monochrome, negative, piecewise_linear,
};

use crate::lut::Lut;
use crate::parallel::for_each_row_mut;
use crate::raster::Raster;

/// Remap R, G and B of every pixel through one table.
pub fn apply_lut(raster: &Raster, lut: &Lut) -> Raster {
    apply_channel_luts(raster, [lut, lut, lut])
}

/// Remap R, G and B through their own tables. Alpha passes through.
pub fn apply_channel_luts(raster: &Raster, luts: [&Lut; 3]) -> Raster {
    let mut output = vec![0u8; raster.pixels().len()];
    for_each_row_mut(&mut output, raster.stride(), |y, row| {
        let src = raster.row(y);
        for (dst, px) in row.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            dst[0] = luts[0].map(px[0]);
            dst[1] = luts[1].map(px[1]);
            dst[2] = luts[2].map(px[2]);
            dst[3] = px[3];
        }
    });
    Raster::from_parts(raster.width(), raster.height(), output)
}

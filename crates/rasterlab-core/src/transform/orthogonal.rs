//! Lossless pixel relocations: mirrors, quarter turns and transpose.

use crate::parallel::for_each_row_mut;
use crate::raster::{Raster, CHANNELS};

/// Fill a `width x height` output where output `(x, y)` reads the source at
/// `source_of(x, y)`. The output has the source's pixel count.
fn remap<F>(raster: &Raster, width: u32, height: u32, source_of: F) -> Raster
where
    F: Fn(usize, usize) -> (usize, usize) + Sync + Send,
{
    let mut output = vec![0u8; raster.pixels().len()];
    for_each_row_mut(&mut output, width as usize * CHANNELS, |y, row| {
        for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let (sx, sy) = source_of(x, y);
            dst.copy_from_slice(&raster.pixel_unchecked(sx, sy));
        }
    });
    Raster::from_parts(width, height, output)
}

/// `out(x, y) = in(W-1-x, y)`.
pub fn mirror_horizontal(raster: &Raster) -> Raster {
    let (w, h) = raster.dimensions();
    let last = w as usize - usize::from(w > 0);
    remap(raster, w, h, |x, y| (last - x, y))
}

/// `out(x, y) = in(x, H-1-y)`.
pub fn mirror_vertical(raster: &Raster) -> Raster {
    let (w, h) = raster.dimensions();
    let last = h as usize - usize::from(h > 0);
    remap(raster, w, h, |x, y| (x, last - y))
}

/// Quarter turn clockwise: `out(H-1-y, x) = in(x, y)`.
pub fn rotate_right(raster: &Raster) -> Raster {
    let (w, h) = raster.dimensions();
    let last_row = h as usize - usize::from(h > 0);
    // Output (X, Y) reads input (Y, H-1-X).
    remap(raster, h, w, |x, y| (y, last_row - x))
}

/// Quarter turn counter-clockwise: `out(y, W-1-x) = in(x, y)`.
pub fn rotate_left(raster: &Raster) -> Raster {
    let (w, h) = raster.dimensions();
    let last_col = w as usize - usize::from(w > 0);
    // Output (X, Y) reads input (W-1-Y, X).
    remap(raster, h, w, |x, y| (last_col - y, x))
}

/// `out(y, x) = in(x, y)`.
pub fn transpose(raster: &Raster) -> Raster {
    let (w, h) = raster.dimensions();
    remap(raster, h, w, |x, y| (y, x))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raster_strategy() -> impl Strategy<Value = Raster> {
        (1u32..=20, 1u32..=20).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |pixels| Raster::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_transpose_involution(raster in raster_strategy()) {
            prop_assert_eq!(transpose(&transpose(&raster)), raster);
        }

        #[test]
        fn prop_rotate_right_undoes_left(raster in raster_strategy()) {
            prop_assert_eq!(rotate_right(&rotate_left(&raster)), raster.clone());
            prop_assert_eq!(rotate_left(&rotate_right(&raster)), raster);
        }

        #[test]
        fn prop_mirrors_are_involutions(raster in raster_strategy()) {
            prop_assert_eq!(mirror_horizontal(&mirror_horizontal(&raster)), raster.clone());
            prop_assert_eq!(mirror_vertical(&mirror_vertical(&raster)), raster);
        }

        /// Property: four right turns return the input.
        #[test]
        fn prop_four_quarter_turns(raster in raster_strategy()) {
            let once = rotate_right(&raster);
            let out = rotate_right(&rotate_right(&rotate_right(&once)));
            prop_assert_eq!(out, raster);
        }
    }
}

//! Region-of-interest cropping.

use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};
use crate::parallel::for_each_row_mut;
use crate::raster::{output_len, Raster, CHANNELS};

/// Pixel rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiRect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl RoiRect {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle spanned by two drag corners given in any order.
    pub fn from_corners(a: (i64, i64), b: (i64, i64)) -> Self {
        Self {
            min_x: a.0.min(b.0),
            min_y: a.1.min(b.1),
            max_x: a.0.max(b.0),
            max_y: a.1.max(b.1),
        }
    }

    /// The whole of a `width x height` raster.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// Intersection with `[0, width] x [0, height]`.
    pub fn clip(&self, width: u32, height: u32) -> Self {
        let (w, h) = (width as i64, height as i64);
        Self {
            min_x: self.min_x.clamp(0, w),
            min_y: self.min_y.clamp(0, h),
            max_x: self.max_x.clamp(0, w),
            max_y: self.max_y.clamp(0, h),
        }
    }
}

/// Copy the pixels inside `rect` into a new raster.
///
/// The rectangle is clipped to the raster first.
///
/// # Errors
///
/// Returns `InvalidParameter` if the clipped rectangle has no width or height.
pub fn crop(raster: &Raster, rect: RoiRect) -> TransformResult<Raster> {
    let clipped = rect.clip(raster.width(), raster.height());
    if clipped.width() <= 0 || clipped.height() <= 0 {
        return Err(TransformError::InvalidParameter(format!(
            "crop rectangle ({}, {})-({}, {}) is empty inside a {}x{} image",
            rect.min_x,
            rect.min_y,
            rect.max_x,
            rect.max_y,
            raster.width(),
            raster.height()
        )));
    }
    log::debug!(
        "crop {}x{} -> ({}, {})-({}, {})",
        raster.width(),
        raster.height(),
        clipped.min_x,
        clipped.min_y,
        clipped.max_x,
        clipped.max_y
    );

    let out_w = clipped.width() as u32;
    let out_h = clipped.height() as u32;
    let left = clipped.min_x as usize * CHANNELS;
    let top = clipped.min_y as usize;
    let row_len = out_w as usize * CHANNELS;

    let mut output = vec![0u8; output_len(out_w, out_h)?];
    // Copy pixel data row by row
    for_each_row_mut(&mut output, row_len, |y, row| {
        let src = raster.row(top + y);
        row.copy_from_slice(&src[left..left + row_len]);
    });
    Ok(Raster::from_parts(out_w, out_h, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each pixel's red channel holds its index.
    fn test_image(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::new();
        for i in 0..width * height {
            pixels.extend_from_slice(&[(i % 256) as u8, 0, 0, 255]);
        }
        Raster::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(7, 5);
        assert_eq!(crop(&img, RoiRect::full(7, 5)).unwrap(), img);
    }

    #[test]
    fn test_crop_center() {
        let img = test_image(4, 4);
        let out = crop(&img, RoiRect::new(1, 1, 3, 3)).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.pixel(0, 0).unwrap()[0], 5);
        assert_eq!(out.pixel(1, 0).unwrap()[0], 6);
        assert_eq!(out.pixel(0, 1).unwrap()[0], 9);
        assert_eq!(out.pixel(1, 1).unwrap()[0], 10);
    }

    #[test]
    fn test_crop_clips_to_bounds() {
        let img = test_image(4, 4);
        let out = crop(&img, RoiRect::new(-5, 2, 100, 100)).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out.pixel(0, 0).unwrap()[0], 8);
    }

    #[test]
    fn test_degenerate_rectangles_rejected() {
        let img = test_image(4, 4);
        for rect in [
            RoiRect::new(2, 2, 2, 3),
            RoiRect::new(3, 1, 1, 3),
            RoiRect::new(10, 10, 20, 20),
            RoiRect::new(-3, -3, 0, 0),
        ] {
            assert!(
                matches!(crop(&img, rect), Err(TransformError::InvalidParameter(_))),
                "{rect:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_corners_orders() {
        let rect = RoiRect::from_corners((10, 2), (3, 8));
        assert_eq!(rect, RoiRect::new(3, 2, 10, 8));
        assert_eq!(rect.width(), 7);
        assert_eq!(rect.height(), 6);
    }
}

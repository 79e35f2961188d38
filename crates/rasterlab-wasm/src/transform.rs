//! WASM bindings for geometric transforms.
//!
//! Interpolation is passed as a number: 0 = nearest neighbour, 1 = bilinear.

use crate::types::{interpolation_from_u8, js_error, JsRaster};
use rasterlab_core::transform::{self, RoiRect};
use rasterlab_core::ParameterLimits;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn mirror_horizontal(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::mirror_horizontal(image.raster()))
}

#[wasm_bindgen]
pub fn mirror_vertical(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::mirror_vertical(image.raster()))
}

#[wasm_bindgen]
pub fn rotate_right(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::rotate_right(image.raster()))
}

#[wasm_bindgen]
pub fn rotate_left(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::rotate_left(image.raster()))
}

#[wasm_bindgen]
pub fn transpose(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::transpose(image.raster()))
}

/// Crop to the pixel rectangle spanned by two corners, in any order.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Region dragged from (120, 80) to (20, 10)
/// const cropped = crop(image, 120, 80, 20, 10);
/// ```
#[wasm_bindgen]
pub fn crop(image: &JsRaster, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<JsRaster, JsValue> {
    let rect = RoiRect::from_corners((x0 as i64, y0 as i64), (x1 as i64, y1 as i64));
    transform::crop(image.raster(), rect)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Rotate by an arbitrary angle in degrees. The canvas grows to fit the
/// rotated corners; uncovered pixels are transparent.
#[wasm_bindgen]
pub fn rotate(
    image: &JsRaster,
    angle_degrees: f64,
    interpolation: u8,
) -> Result<JsRaster, JsValue> {
    transform::rotate(
        image.raster(),
        angle_degrees,
        interpolation_from_u8(interpolation),
    )
    .map(JsRaster::from_raster)
    .map_err(js_error)
}

/// Rotate by scattering source pixels onto the canvas (may leave holes).
#[wasm_bindgen]
pub fn rotate_forward(image: &JsRaster, angle_degrees: f64) -> Result<JsRaster, JsValue> {
    transform::rotate_forward(image.raster(), angle_degrees)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Rescale by a percentage (100 = unchanged).
#[wasm_bindgen]
pub fn rescale(image: &JsRaster, percent: f64, interpolation: u8) -> Result<JsRaster, JsValue> {
    let factor = ParameterLimits::default()
        .check_rescale_percent(percent)
        .map_err(js_error)?;
    transform::rescale(image.raster(), factor, interpolation_from_u8(interpolation))
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Raster;

    /// Create a simple test image.
    fn test_image(width: u32, height: u32) -> JsRaster {
        let pixels: Vec<u8> = (0..(width * height * 4) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsRaster::from_raster(Raster::new(width, height, pixels).unwrap())
    }

    #[test]
    fn test_rotation_no_change() {
        let img = test_image(100, 100);
        let result = rotate(&img, 0.0, 1).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_rotation_90_degrees() {
        let img = test_image(100, 50);
        let result = rotate(&img, 90.0, 0).unwrap();
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 100);
    }

    #[test]
    fn test_rotation_45_degrees_expands() {
        let img = test_image(100, 100);
        let result = rotate_forward(&img, 45.0).unwrap();
        assert!(result.width() > 100);
        assert!(result.height() > 100);
    }

    #[test]
    fn test_crop_corners_any_order() {
        let img = test_image(10, 10);
        let result = crop(&img, 8, 6, 2, 1).unwrap();
        assert_eq!(result.width(), 6);
        assert_eq!(result.height(), 5);
    }

    #[test]
    fn test_rescale_percent() {
        let img = test_image(10, 4);
        let result = rescale(&img, 50.0, 0).unwrap();
        assert_eq!((result.width(), result.height()), (5, 2));
    }

    #[test]
    fn test_quarter_turns() {
        let img = test_image(3, 2);
        assert_eq!(rotate_right(&img).width(), 2);
        assert_eq!(rotate_left(&rotate_right(&img)).pixels(), img.pixels());
        assert_eq!(transpose(&img).height(), 3);
        assert_eq!(mirror_horizontal(&mirror_horizontal(&img)).pixels(), img.pixels());
        assert_eq!(mirror_vertical(&img).width(), 3);
    }
}

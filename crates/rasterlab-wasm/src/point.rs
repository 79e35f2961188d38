//! Point transform WASM bindings.
//!
//! Interactive parameters are checked against [`ParameterLimits`] defaults
//! before the core transform runs.
//!
//! # Example (TypeScript)
//! ```typescript
//! const stats = compute_statistics(raster);
//! const brighter = adjust_brightness_contrast(raster, stats, 140, 60);
//! const curved = piecewise_linear(raster, [{ x: 64, y: 32 }, { x: 192, y: 224 }]);
//! ```

use crate::statistics::JsStatistics;
use crate::types::{js_error, JsRaster};
use rasterlab_core::{point, ControlPoint, ParameterLimits};
use wasm_bindgen::prelude::*;

/// Helper struct for deserializing JS control points via serde.
#[derive(serde::Deserialize)]
struct ControlPointJs {
    x: i32,
    y: i32,
}

fn parse_points(points: JsValue) -> Result<Vec<ControlPoint>, JsValue> {
    let points: Vec<ControlPointJs> = serde_wasm_bindgen::from_value(points)
        .map_err(|e| JsValue::from_str(&format!("Invalid control points: {}", e)))?;
    Ok(points
        .into_iter()
        .map(|p| ControlPoint::new(p.x, p.y))
        .collect())
}

#[wasm_bindgen]
pub fn negative(raster: &JsRaster) -> JsRaster {
    JsRaster::from_raster(point::negative(raster.raster()))
}

#[wasm_bindgen]
pub fn monochrome(raster: &JsRaster) -> JsRaster {
    JsRaster::from_raster(point::monochrome(raster.raster()))
}

/// Rescale levels to a target brightness (mean) and contrast (std-dev).
///
/// `stats` must come from `compute_statistics(raster)`.
#[wasm_bindgen]
pub fn adjust_brightness_contrast(
    raster: &JsRaster,
    stats: &JsStatistics,
    brightness: f64,
    contrast: f64,
) -> Result<JsRaster, JsValue> {
    point::adjust_brightness_contrast(raster.raster(), stats.inner(), brightness, contrast)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn gamma_correction(raster: &JsRaster, gamma: f64) -> Result<JsRaster, JsValue> {
    let gamma = ParameterLimits::default()
        .check_gamma(gamma)
        .map_err(js_error)?;
    point::gamma_correction(raster.raster(), gamma)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Apply a piecewise-linear curve given as an array of `{x, y}` levels.
#[wasm_bindgen]
pub fn piecewise_linear(raster: &JsRaster, points: JsValue) -> Result<JsRaster, JsValue> {
    let points = parse_points(points)?;
    point::piecewise_linear(raster.raster(), &points)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Histogram equalization. `stats` must come from `compute_statistics(raster)`.
#[wasm_bindgen]
pub fn equalize(raster: &JsRaster, stats: &JsStatistics) -> JsRaster {
    JsRaster::from_raster(point::equalize(raster.raster(), stats.inner()))
}

/// Match each channel's histogram to `reference`'s.
#[wasm_bindgen]
pub fn match_histogram(
    raster: &JsRaster,
    stats: &JsStatistics,
    reference: &JsStatistics,
) -> Result<JsRaster, JsValue> {
    point::match_histogram(raster.raster(), stats.inner(), reference.inner())
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn difference(source: &JsRaster, other: &JsRaster) -> Result<JsRaster, JsValue> {
    point::difference(source.raster(), other.raster())
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Paint pixels whose luma changed by more than `threshold` with the
/// highlight colour.
#[wasm_bindgen]
pub fn change_map(
    source: &JsRaster,
    other: &JsRaster,
    threshold: u8,
    r: u8,
    g: u8,
    b: u8,
) -> Result<JsRaster, JsValue> {
    let threshold = ParameterLimits::default()
        .check_threshold(threshold)
        .map_err(js_error)?;
    point::change_map(source.raster(), other.raster(), threshold, [r, g, b, 255])
        .map(JsRaster::from_raster)
        .map_err(js_error)
}


/// WASM-specific tests that require JsValue.
///
/// Control points and errors cross the boundary as `JsValue`, which only
/// exists on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use rasterlab_core::Raster;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    struct TestControlPoint {
        x: i32,
        y: i32,
    }

    fn ramp() -> JsRaster {
        JsRaster::from_raster(Raster::from_gray(2, 2, &[10, 20, 30, 40]).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_parse_points() {
        let points = vec![
            TestControlPoint { x: 64, y: 32 },
            TestControlPoint { x: 192, y: 224 },
        ];
        let js_points = serde_wasm_bindgen::to_value(&points).unwrap();
        let parsed = parse_points(js_points).unwrap();
        assert_eq!(
            parsed,
            vec![ControlPoint::new(64, 32), ControlPoint::new(192, 224)]
        );
    }

    #[wasm_bindgen_test]
    fn test_parse_points_rejects_non_array() {
        let err = parse_points(JsValue::from_str("not points")).unwrap_err();
        let message = err.as_string().unwrap();
        assert!(message.starts_with("Invalid control points"), "{message}");
    }

    #[wasm_bindgen_test]
    fn test_piecewise_linear_inverted_curve() {
        let points = vec![
            TestControlPoint { x: 0, y: 255 },
            TestControlPoint { x: 255, y: 0 },
        ];
        let js_points = serde_wasm_bindgen::to_value(&points).unwrap();
        let out = piecewise_linear(&ramp(), js_points).unwrap();
        assert_eq!(&out.pixels()[..4], &[245, 245, 245, 255]);
    }

    #[wasm_bindgen_test]
    fn test_piecewise_linear_out_of_range_point() {
        let points = vec![TestControlPoint { x: 300, y: 10 }];
        let js_points = serde_wasm_bindgen::to_value(&points).unwrap();
        let err = piecewise_linear(&ramp(), js_points).unwrap_err();
        assert!(err.as_string().unwrap().contains("outside 0..=255"));
    }

    #[wasm_bindgen_test]
    fn test_gamma_outside_limits() {
        for gamma in [0.0, 0.01, 25.0] {
            let err = gamma_correction(&ramp(), gamma).unwrap_err();
            let message = err.as_string().unwrap();
            assert!(message.starts_with("Invalid parameter: gamma"), "{message}");
        }
    }

    #[wasm_bindgen_test]
    fn test_difference_size_mismatch() {
        let other = JsRaster::from_raster(Raster::blank(3, 2).unwrap());
        let err = difference(&ramp(), &other).unwrap_err();
        assert_eq!(
            err.as_string().unwrap(),
            "Dimension mismatch: expected 2x2, got 3x2"
        );
    }
}

//! Statistics WASM bindings.
//!
//! Histograms are exposed as `Uint32Array` (counts) and `Float64Array`
//! (normalized) copies; scalar statistics as getters.

use crate::types::JsRaster;
use rasterlab_core::{Channel, ImageStatistics};
use wasm_bindgen::prelude::*;

/// Statistics of one raster, accessible from JavaScript.
///
/// # Example (TypeScript)
/// ```typescript
/// const stats = compute_statistics(raster);
/// const gray = stats.histogram(0);   // Uint32Array[256]
/// console.log(stats.brightness, stats.contrast);
/// stats.free();
/// ```
#[wasm_bindgen]
pub struct JsStatistics {
    inner: ImageStatistics,
}

/// Channel index used by the JS API: 0 gray, 1 red, 2 green, 3 blue.
fn channel_from_u8(value: u8) -> Channel {
    match value {
        1 => Channel::Red,
        2 => Channel::Green,
        3 => Channel::Blue,
        _ => Channel::Gray,
    }
}

#[wasm_bindgen]
impl JsStatistics {
    /// Histogram counts (256 bins) for a channel.
    pub fn histogram(&self, channel: u8) -> Vec<u32> {
        self.inner
            .histograms
            .get(channel_from_u8(channel))
            .bins()
            .to_vec()
    }

    /// Count of pixels strictly below each level.
    pub fn cumulative(&self, channel: u8) -> Vec<u32> {
        self.inner
            .cumulative
            .get(channel_from_u8(channel))
            .bins()
            .to_vec()
    }

    /// Histogram counts divided by the pixel count.
    pub fn normalized(&self, channel: u8) -> Vec<f64> {
        self.inner
            .normalized
            .get(channel_from_u8(channel))
            .bins()
            .to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f64 {
        self.inner.brightness
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f64 {
        self.inner.contrast
    }

    /// Lowest occupied gray level, or `undefined` for an empty histogram.
    #[wasm_bindgen(getter)]
    pub fn min_color(&self) -> Option<u8> {
        self.inner.min_color
    }

    /// Highest occupied gray level, or `undefined` for an empty histogram.
    #[wasm_bindgen(getter)]
    pub fn max_color(&self) -> Option<u8> {
        self.inner.max_color
    }

    #[wasm_bindgen(getter)]
    pub fn entropy(&self) -> u32 {
        self.inner.entropy
    }

    #[wasm_bindgen(getter)]
    pub fn number_of_colors(&self) -> usize {
        self.inner.number_of_colors
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> usize {
        self.inner.pixel_count
    }
}

impl JsStatistics {
    pub(crate) fn inner(&self) -> &ImageStatistics {
        &self.inner
    }
}

/// Compute histograms and scalar statistics for a raster.
#[wasm_bindgen]
pub fn compute_statistics(raster: &JsRaster) -> JsStatistics {
    JsStatistics {
        inner: rasterlab_core::compute_statistics(raster.raster()),
    }
}

//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core rasterlab
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use rasterlab_core::{Interpolation, Raster};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::ImageData;

/// An RGBA8 raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from RGBA pixel data (4 bytes per pixel, row-major).
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Raster::new(width, height, pixels)
            .map(JsRaster::from_raster)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Copy a canvas `ImageData` into a raster.
    pub fn from_image_data(data: &ImageData) -> Result<JsRaster, JsValue> {
        let Clamped(pixels) = data.data();
        JsRaster::new(data.width(), data.height(), pixels)
    }

    /// Copy the pixels into a canvas `ImageData`.
    pub fn to_image_data(&self) -> Result<ImageData, JsValue> {
        ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.inner.pixels()),
            self.inner.width(),
            self.inner.height(),
        )
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {}
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &Raster {
        &self.inner
    }
}

/// Convert a u8 interpolation value to the core enum.
///
/// Values:
/// - 0 = nearest neighbour
/// - 1 = bilinear
///
/// Any other value defaults to nearest neighbour.
pub(crate) fn interpolation_from_u8(value: u8) -> Interpolation {
    match value {
        1 => Interpolation::Bilinear,
        _ => Interpolation::NearestNeighbor,
    }
}

/// Map any displayable core error to a JS string error.
pub(crate) fn js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

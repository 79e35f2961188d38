//! Image encoding WASM bindings for the export workflow.
//!
//! # Example
//!
//! ```typescript
//! const png = encode_png(raster);
//! const jpeg = encode_jpeg(raster, 90);
//! ```

use crate::types::{js_error, JsRaster};
use rasterlab_core::{encode, EncodeFormat};
use wasm_bindgen::prelude::*;

/// Encode as PNG, keeping alpha.
#[wasm_bindgen]
pub fn encode_png(image: &JsRaster) -> Result<Vec<u8>, JsValue> {
    encode(image.raster(), EncodeFormat::Png).map_err(js_error)
}

/// Encode as JPEG. Alpha is dropped; `quality` is clamped to 1-100.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRaster, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode(image.raster(), EncodeFormat::Jpeg { quality }).map_err(js_error)
}

/// Encode as TIFF, keeping alpha.
#[wasm_bindgen]
pub fn encode_tiff(image: &JsRaster) -> Result<Vec<u8>, JsValue> {
    encode(image.raster(), EncodeFormat::Tiff).map_err(js_error)
}

/// Encode in the format named by a file extension such as `"png"` or `"jpg"`.
#[wasm_bindgen]
pub fn encode_for_extension(image: &JsRaster, extension: &str) -> Result<Vec<u8>, JsValue> {
    let format = EncodeFormat::from_extension(extension).map_err(js_error)?;
    encode(image.raster(), format).map_err(js_error)
}

//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const raster = decode(bytes);
//! console.log(`Decoded ${raster.width}x${raster.height}`);
//! ```

use crate::types::{js_error, JsRaster};
use rasterlab_core::decode as core_decode;
use wasm_bindgen::prelude::*;

/// Decode PNG, JPEG or TIFF bytes (or a 64000-byte legacy raw gray buffer).
///
/// JPEG EXIF orientation is applied.
#[wasm_bindgen]
pub fn decode(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    core_decode::decode(bytes)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Decode headerless 8-bit gray data of the given size.
#[wasm_bindgen]
pub fn decode_raw_gray(bytes: &[u8], width: u32, height: u32) -> Result<JsRaster, JsValue> {
    core_decode::decode_raw_gray(bytes, width, height)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{encode, EncodeFormat, Raster};

    #[test]
    fn test_decode_png() {
        let src = Raster::filled(3, 2, [9, 8, 7, 255]).unwrap();
        let bytes = encode(&src, EncodeFormat::Png).unwrap();
        let img = decode(&bytes).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.pixels(), src.pixels());
    }

    #[test]
    fn test_decode_raw_gray() {
        let img = decode_raw_gray(&[1, 2, 3, 4, 5, 6], 3, 2).unwrap();
        assert_eq!(img.height(), 2);
        assert_eq!(&img.pixels()[..4], &[1, 1, 1, 255]);
    }
}

//! Rasterlab WASM - WebAssembly bindings for Rasterlab
//!
//! This crate exposes the rasterlab-core statistics and transform engine to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsRaster`, the WASM-side owner of RGBA pixel data
//! - `statistics` - histograms and scalar statistics
//! - `point` - tone, histogram and comparison transforms
//! - `transform` - mirrors, quarter turns, crop, rotation, rescale
//! - `decode` / `encode` - codec bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode, compute_statistics, equalize } from '@rasterlab/wasm';
//!
//! await init();
//!
//! const raster = decode(new Uint8Array(await file.arrayBuffer()));
//! const stats = compute_statistics(raster);
//! const flat = equalize(raster, stats);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod point;
mod statistics;
mod transform;
mod types;

pub use decode::{decode, decode_raw_gray};
pub use encode::{encode_for_extension, encode_jpeg, encode_png, encode_tiff};
pub use point::{
    adjust_brightness_contrast, change_map, difference, equalize, gamma_correction,
    match_histogram, monochrome, negative, piecewise_linear,
};
pub use statistics::{compute_statistics, JsStatistics};
pub use transform::{
    crop, mirror_horizontal, mirror_vertical, rescale, rotate, rotate_forward, rotate_left,
    rotate_right, transpose,
};
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging("info");
}

/// Set the console log level: "error", "warn", "info", "debug" or "trace".
///
/// Unknown names fall back to info. Only the first call installs the logger;
/// later calls adjust the level.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let level = parse_level(level);
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

fn parse_level(level: &str) -> log::Level {
    level.parse().unwrap_or(log::Level::Info)
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

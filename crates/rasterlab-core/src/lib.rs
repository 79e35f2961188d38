//! Rasterlab Core - image statistics and transform engine
//!
//! This crate turns decoded RGBA8 pixel buffers into histogram statistics and
//! runs point transforms (tone curves, histogram equalization and matching,
//! image comparison) and geometric transforms (mirrors, quarter turns, crop,
//! arbitrary rotation, rescaling) over them.
//!
//! Every operation is a pure function from an immutable [`Raster`] plus
//! parameters to a freshly allocated [`Raster`]. Callers recompute
//! [`ImageStatistics`] for each result.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod histogram;
pub mod luminance;
pub mod lut;
pub mod parallel;
pub mod point;
pub mod raster;
pub mod statistics;
pub mod transform;

pub use config::ParameterLimits;
pub use decode::{decode, decode_with_format, DecodeError, SourceFormat};
pub use encode::{encode, EncodeError, EncodeFormat};
pub use error::{Error, Result, TransformError, TransformResult};
pub use histogram::{Channel, Channels, CumulativeHistogram, Histogram, NormalizedHistogram};
pub use lut::Lut;
pub use raster::Raster;
pub use statistics::{compute_statistics, ImageStatistics};
pub use transform::{Interpolation, RoiRect};

/// Tone curve control point in 8-bit level space.
///
/// Coordinates are signed so out-of-range input from a UI can be reported
/// rather than silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ControlPoint {
    /// Input level (0 to 255)
    pub x: i32,
    /// Output level (0 to 255)
    pub y: i32,
}

impl ControlPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are valid levels.
    pub fn validate(&self) -> TransformResult<()> {
        if (0..=255).contains(&self.x) && (0..=255).contains(&self.y) {
            Ok(())
        } else {
            Err(TransformError::InvalidParameter(format!(
                "control point ({}, {}) outside 0..=255",
                self.x, self.y
            )))
        }
    }
}

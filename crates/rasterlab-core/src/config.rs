//! Accepted ranges for interactive parameters.
//!
//! The engine itself accepts any value that is mathematically valid. These
//! limits describe what an editing UI should offer and are checked by the
//! bindings before a transform runs.

use serde::{Deserialize, Serialize};

use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::error::{TransformError, TransformResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterLimits {
    /// Inclusive gamma bounds.
    pub gamma: (f64, f64),
    /// Inclusive rescale bounds in percent.
    pub rescale_percent: (f64, f64),
    /// Inclusive change-map threshold bounds.
    pub threshold: (u8, u8),
    pub jpeg_quality: u8,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            gamma: (0.05, 20.0),
            rescale_percent: (1.0, 500.0),
            threshold: (0, 255),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    name: &str,
    value: T,
    (lo, hi): (T, T),
) -> TransformResult<T> {
    if value >= lo && value <= hi {
        Ok(value)
    } else {
        Err(TransformError::InvalidParameter(format!(
            "{name} {value} outside [{lo}, {hi}]"
        )))
    }
}

impl ParameterLimits {
    pub fn check_gamma(&self, gamma: f64) -> TransformResult<f64> {
        check_range("gamma", gamma, self.gamma)
    }

    /// Validate a percentage and return it as a scale factor.
    pub fn check_rescale_percent(&self, percent: f64) -> TransformResult<f64> {
        check_range("rescale percent", percent, self.rescale_percent).map(|p| p / 100.0)
    }

    pub fn check_threshold(&self, threshold: u8) -> TransformResult<u8> {
        check_range("threshold", threshold, self.threshold)
    }
}

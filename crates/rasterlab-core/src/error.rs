//! Error types shared by the statistics and transform engines.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors raised by point and geometric transforms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// A two-image operation received rasters of different sizes.
    #[error("Dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A parameter is outside the range the operation accepts.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The operation would divide by a zero statistic.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Pixel buffer length does not match the requested dimensions.
    #[error("Invalid pixel buffer: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },
}

/// Result type for transform operations.
pub type TransformResult<T> = std::result::Result<T, TransformError>;

/// Any failure the engine can report to a collaborator.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

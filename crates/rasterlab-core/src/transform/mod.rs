//! Geometric transforms: mirrors, right-angle rotations, transpose, crop,
//! arbitrary rotation and rescaling.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x grows right, y grows down
//! - Rotation angles are in degrees
//! - Crop rectangles are in pixels, `min` inclusive and `max` exclusive
//!
//! Resampling transforms map every destination pixel back into the source.
//! Destination pixels whose sample falls outside the source are left
//! transparent black; this is clipping, not an error.

mod crop;
mod orthogonal;
mod rotation;
mod sampling;
mod scale;

pub use crop::{crop, RoiRect};
pub use orthogonal::{mirror_horizontal, mirror_vertical, rotate_left, rotate_right, transpose};
pub use rotation::{rotate, rotate_forward, rotated_bounds, RotatedBounds};
pub use scale::{rescale, rescale_axes};

use serde::{Deserialize, Serialize};

/// Resampling strategy for rotation and rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Copy the nearest source pixel ("VMP").
    #[default]
    NearestNeighbor,
    /// Weighted blend of the four surrounding source pixels.
    Bilinear,
}

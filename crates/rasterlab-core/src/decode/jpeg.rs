//! EXIF orientation handling for JPEG sources.

use std::io::Cursor;

use exif::{In, Reader, Tag};

use super::Orientation;
use crate::raster::Raster;
use crate::transform::{mirror_horizontal, mirror_vertical, rotate_left, rotate_right, transpose};

/// Read the EXIF orientation tag from JPEG bytes.
///
/// Returns `Orientation::Normal` if there is no EXIF block or no
/// orientation entry.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(exif::Error::NotFound(_)) => Orientation::Normal,
        Err(e) => {
            log::warn!("ignoring unreadable EXIF block: {e}");
            Orientation::Normal
        }
    }
}

/// Undo a camera orientation so the raster displays upright.
pub fn apply_orientation(raster: Raster, orientation: Orientation) -> Raster {
    if orientation != Orientation::Normal {
        log::debug!(
            "undoing EXIF orientation {:?} on {}x{} (swaps dimensions: {})",
            orientation,
            raster.width(),
            raster.height(),
            orientation.swaps_dimensions()
        );
    }
    match orientation {
        Orientation::Normal => raster,
        Orientation::FlipHorizontal => mirror_horizontal(&raster),
        Orientation::Rotate180 => mirror_vertical(&mirror_horizontal(&raster)),
        Orientation::FlipVertical => mirror_vertical(&raster),
        Orientation::Transpose => transpose(&raster),
        Orientation::Rotate90CW => rotate_right(&raster),
        Orientation::Transverse => mirror_vertical(&rotate_right(&raster)),
        Orientation::Rotate270CW => rotate_left(&raster),
    }
}

//! Headerless 8-bit gray buffers.

use super::DecodeError;
use crate::raster::Raster;

/// Width of the legacy headerless gray format.
pub const RAW_GRAY_WIDTH: u32 = 320;
/// Height of the legacy headerless gray format.
pub const RAW_GRAY_HEIGHT: u32 = 200;
/// Byte length that identifies an unlabelled buffer as legacy raw gray.
pub const RAW_GRAY_LEN: usize = (RAW_GRAY_WIDTH * RAW_GRAY_HEIGHT) as usize;

/// Expand one-byte-per-pixel gray data into an opaque RGBA raster.
///
/// # Errors
///
/// Returns `InvalidDimensions` if either dimension is zero or
/// `bytes.len() != width * height`.
pub fn decode_raw_gray(bytes: &[u8], width: u32, height: u32) -> Result<Raster, DecodeError> {
    let expected = (width as usize).checked_mul(height as usize);
    if width == 0 || height == 0 || expected != Some(bytes.len()) {
        return Err(DecodeError::InvalidDimensions {
            width,
            height,
            len: bytes.len(),
        });
    }
    Raster::from_gray(width, height, bytes).map_err(|_| DecodeError::InvalidDimensions {
        width,
        height,
        len: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_raw_gray() {
        let raster = decode_raw_gray(&[0, 128, 255, 7], 2, 2).unwrap();
        assert_eq!(raster.dimensions(), (2, 2));
        assert_eq!(raster.pixel(1, 0), Some([128, 128, 128, 255]));
        assert_eq!(raster.pixel(1, 1), Some([7, 7, 7, 255]));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            decode_raw_gray(&[0; 5], 2, 2),
            Err(DecodeError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 5
            })
        );
        assert!(decode_raw_gray(&[], 0, 0).is_err());
    }

    #[test]
    fn test_legacy_size() {
        assert_eq!(RAW_GRAY_LEN, 64_000);
    }
}

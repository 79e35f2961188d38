//! Raster-to-bytes encoding for export.
//!
//! PNG and TIFF keep all four channels. JPEG has no alpha, so it is dropped
//! and the colour channels are written as-is.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tiff::TiffEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::Raster;

/// Default JPEG quality for export.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during encoding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    /// No encoder exists for the requested format name.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeFormat {
    Png,
    /// `quality` is clamped to 1-100.
    Jpeg { quality: u8 },
    Tiff,
}

impl EncodeFormat {
    /// Pick a format from a file extension, case-insensitively.
    ///
    /// JPEG uses [`DEFAULT_JPEG_QUALITY`].
    pub fn from_extension(ext: &str) -> Result<Self, EncodeError> {
        let ext = ext.trim_start_matches('.');
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg {
                quality: DEFAULT_JPEG_QUALITY,
            }),
            "tif" | "tiff" => Ok(Self::Tiff),
            _ => Err(EncodeError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpg",
            Self::Tiff => "tif",
        }
    }
}

/// Encode a raster into the given container.
///
/// # Errors
///
/// Returns `InvalidDimensions` for an empty raster and `EncodingFailed` if
/// the codec reports an error.
pub fn encode(raster: &Raster, format: EncodeFormat) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    log::debug!("encode {}x{} as {:?}", width, height, format);

    let failed = |e: image::ImageError| EncodeError::EncodingFailed(e.to_string());
    let mut buffer = Cursor::new(Vec::new());
    match format {
        EncodeFormat::Png => PngEncoder::new(&mut buffer)
            .write_image(raster.pixels(), width, height, ExtendedColorType::Rgba8)
            .map_err(failed)?,
        EncodeFormat::Jpeg { quality } => {
            let rgb = strip_alpha(raster.pixels());
            JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(failed)?
        }
        EncodeFormat::Tiff => TiffEncoder::new(&mut buffer)
            .write_image(raster.pixels(), width, height, ExtendedColorType::Rgba8)
            .map_err(failed)?,
    }
    Ok(buffer.into_inner())
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> Raster {
        Raster::filled(width, height, [128, 128, 128, 255]).unwrap()
    }

    #[test]
    fn test_encode_png_magic() {
        let bytes = encode(&gray(10, 10), EncodeFormat::Png).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let bytes = encode(&gray(100, 100), EncodeFormat::Jpeg { quality: 90 }).unwrap();
        // SOI at the start, EOI at the end
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_tiff_magic() {
        let bytes = encode(&gray(4, 4), EncodeFormat::Tiff).unwrap();
        let magic = &bytes[..4];
        assert!(magic == b"II*\0" || magic == b"MM\0*", "magic {magic:?}");
    }

    #[test]
    fn test_jpeg_quality_affects_size() {
        let mut pixels = Vec::new();
        for i in 0..64 * 64u32 {
            pixels.extend_from_slice(&[
                (i * 7 % 256) as u8,
                (i * 13 % 256) as u8,
                (i % 256) as u8,
                255,
            ]);
        }
        let noisy = Raster::new(64, 64, pixels).unwrap();
        let low = encode(&noisy, EncodeFormat::Jpeg { quality: 10 }).unwrap();
        let high = encode(&noisy, EncodeFormat::Jpeg { quality: 100 }).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_jpeg_quality_zero_is_clamped() {
        assert!(encode(&gray(8, 8), EncodeFormat::Jpeg { quality: 0 }).is_ok());
    }

    #[test]
    fn test_empty_raster_rejected() {
        assert_eq!(
            encode(&Raster::blank(0, 5).unwrap(), EncodeFormat::Png),
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(EncodeFormat::from_extension("PNG"), Ok(EncodeFormat::Png));
        assert_eq!(
            EncodeFormat::from_extension(".jpeg"),
            Ok(EncodeFormat::Jpeg {
                quality: DEFAULT_JPEG_QUALITY
            })
        );
        assert_eq!(EncodeFormat::from_extension("tif"), Ok(EncodeFormat::Tiff));
        assert_eq!(
            EncodeFormat::from_extension("gif"),
            Err(EncodeError::UnsupportedFormat("gif".into()))
        );
    }

    #[test]
    fn test_extension_round_trip() {
        for format in [EncodeFormat::Png, EncodeFormat::Tiff] {
            assert_eq!(EncodeFormat::from_extension(format.extension()), Ok(format));
        }
    }

    #[test]
    fn test_strip_alpha() {
        assert_eq!(strip_alpha(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![1, 2, 3, 5, 6, 7]);
    }
}

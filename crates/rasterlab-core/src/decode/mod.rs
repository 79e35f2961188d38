//! Byte-to-raster decoding.
//!
//! PNG, JPEG and TIFF containers go through the `image` crate and come out as
//! RGBA8; 16-bit samples keep their high byte. JPEG EXIF orientation is
//! undone with the engine's own mirror and quarter-turn transforms.
//!
//! Input that no decoder recognises but is exactly 320·200 bytes long is
//! read as the legacy headerless gray format.

mod jpeg;
mod raw;
mod types;

pub use jpeg::{apply_orientation, get_orientation};
pub use raw::{decode_raw_gray, RAW_GRAY_HEIGHT, RAW_GRAY_LEN, RAW_GRAY_WIDTH};
pub use types::{DecodeError, Orientation, SourceFormat};

use std::io::Cursor;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

use crate::raster::Raster;

/// Decode image bytes into a raster.
///
/// # Errors
///
/// See [`decode_with_format`].
pub fn decode(bytes: &[u8]) -> Result<Raster, DecodeError> {
    decode_with_format(bytes).map(|(raster, _)| raster)
}

/// Decode image bytes and report which container they held.
///
/// # Errors
///
/// - `UnsupportedFormat` if the container is unknown or not compiled in
/// - `CorruptedFile` if a recognised container fails to decode
/// - `InvalidDimensions` if the decoded image has no pixels
pub fn decode_with_format(bytes: &[u8]) -> Result<(Raster, SourceFormat), DecodeError> {
    let (format, container) = match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => (SourceFormat::Png, ImageFormat::Png),
        Ok(ImageFormat::Jpeg) => (SourceFormat::Jpeg, ImageFormat::Jpeg),
        Ok(ImageFormat::Tiff) => (SourceFormat::Tiff, ImageFormat::Tiff),
        Ok(other) => {
            log::debug!("no decoder for {other:?}");
            return Err(DecodeError::UnsupportedFormat);
        }
        Err(_) if bytes.len() == RAW_GRAY_LEN => {
            log::warn!(
                "unrecognised {}-byte input, reading as {}x{} raw gray",
                bytes.len(),
                RAW_GRAY_WIDTH,
                RAW_GRAY_HEIGHT
            );
            let raster = decode_raw_gray(bytes, RAW_GRAY_WIDTH, RAW_GRAY_HEIGHT)?;
            return Ok((raster, SourceFormat::RawGray));
        }
        Err(_) => return Err(DecodeError::UnsupportedFormat),
    };

    let mut raster = decode_container(bytes, container)?;
    if format == SourceFormat::Jpeg {
        raster = apply_orientation(raster, get_orientation(bytes));
    }
    log::debug!(
        "decoded {:?} {}x{}",
        format,
        raster.width(),
        raster.height()
    );
    Ok((raster, format))
}

fn decode_container(bytes: &[u8], format: ImageFormat) -> Result<Raster, DecodeError> {
    let img = ImageReader::with_format(Cursor::new(bytes), format)
        .decode()
        .map_err(map_image_error)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
            len: bytes.len(),
        });
    }
    Ok(to_raster(img))
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}

/// Convert to RGBA8, keeping the high byte of 16-bit samples.
fn to_raster(img: DynamicImage) -> Raster {
    match img {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => {
            let wide = img.into_rgba16();
            let (width, height) = wide.dimensions();
            let narrow: Vec<u8> = wide.into_raw().iter().map(|&v| (v >> 8) as u8).collect();
            Raster::from_parts(width, height, narrow)
        }
        other => Raster::from_rgba_image(other.into_rgba8()),
    }
}

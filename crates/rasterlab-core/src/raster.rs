//! Owned RGBA8 pixel storage.
//!
//! A [`Raster`] is the input and output of every engine operation. Its fields
//! are private so a raster handed to a transform cannot be mutated behind the
//! caller's back; transforms always allocate a new raster for their result.

use crate::error::{TransformError, TransformResult};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A decoded image with 8-bit RGBA pixel data in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidBuffer`] if `pixels.len()` is not
    /// `width * height * 4`, or if that product overflows `usize`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> TransformResult<Self> {
        let expected = buffer_len(width, height);
        if expected != Some(pixels.len()) {
            return Err(TransformError::InvalidBuffer {
                expected: expected.unwrap_or(usize::MAX),
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a fully transparent raster.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the buffer size overflows `usize`.
    pub fn blank(width: u32, height: u32) -> TransformResult<Self> {
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; output_len(width, height)?],
        })
    }

    /// Create a raster where every pixel has the same colour.
    ///
    /// # Errors
    ///
    /// Same as [`Raster::blank`].
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> TransformResult<Self> {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(output_len(width, height)?)
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an opaque raster from one gray byte per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidBuffer`] if `gray.len()` is not
    /// `width * height`, or if the RGBA size overflows `usize`.
    pub fn from_gray(width: u32, height: u32, gray: &[u8]) -> TransformResult<Self> {
        let expected = buffer_len(width, height);
        if expected != gray.len().checked_mul(CHANNELS) {
            return Err(TransformError::InvalidBuffer {
                expected: expected.unwrap_or(usize::MAX),
                actual: gray.len().saturating_mul(CHANNELS),
            });
        }
        let mut pixels = Vec::with_capacity(gray.len() * CHANNELS);
        for &v in gray {
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Copy into an `image::RgbaImage` for codec calls.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGBA bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Total number of pixels, transparent ones included.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Byte length of one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixel_unchecked(x as usize, y as usize))
    }

    /// Pixel at signed coordinates, or `None` outside the raster.
    #[inline]
    pub(crate) fn pixel_at(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.pixel_unchecked(x as usize, y as usize))
    }

    #[inline]
    pub(crate) fn pixel_unchecked(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * self.width as usize + x) * CHANNELS;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Row `y` as a byte slice.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let stride = self.stride();
        &self.pixels[y * stride..(y + 1) * stride]
    }

    /// Build a raster from a buffer produced inside the engine.
    ///
    /// Callers guarantee the length; debug builds check it.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            Some(pixels.len()),
            buffer_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub(crate) fn ensure_same_dimensions(&self, other: &Raster) -> TransformResult<()> {
        if self.dimensions() != other.dimensions() {
            return Err(TransformError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}

/// Byte length of a `width x height` RGBA buffer, or `None` on overflow.
#[inline]
pub(crate) fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// Byte length of an output raster the engine is about to allocate.
pub(crate) fn output_len(width: u32, height: u32) -> TransformResult<usize> {
    buffer_len(width, height).ok_or_else(|| {
        TransformError::InvalidParameter(format!(
            "a {width}x{height} raster does not fit in addressable memory"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(Raster::new(2, 2, vec![0u8; 16]).is_ok());
        let err = Raster::new(2, 2, vec![0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidBuffer {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_dimensions_are_rejected() {
        let side = 1u32 << 31;
        let err = Raster::new(side, side, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidBuffer {
                expected: usize::MAX,
                actual: 0
            }
        );
        assert!(Raster::from_gray(side, side, &[]).is_err());
        assert!(matches!(
            Raster::blank(u32::MAX, u32::MAX),
            Err(TransformError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_buffer_len_overflow() {
        assert_eq!(buffer_len(3, 2), Some(24));
        assert_eq!(buffer_len(0, u32::MAX), Some(0));
        assert_eq!(buffer_len(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_pixel_lookup() {
        let raster = Raster::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(raster.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(raster.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(raster.pixel(2, 0), None);
        assert_eq!(raster.pixel(0, 1), None);
        assert_eq!(raster.pixel_at(-1, 0), None);
    }

    #[test]
    fn test_from_gray_is_opaque() {
        let raster = Raster::from_gray(3, 1, &[0, 128, 255]).unwrap();
        assert_eq!(raster.pixel(1, 0), Some([128, 128, 128, 255]));
        assert!(Raster::from_gray(3, 1, &[0, 1]).is_err());
    }

    #[test]
    fn test_filled_and_blank() {
        let filled = Raster::filled(3, 2, [9, 8, 7, 255]).unwrap();
        assert_eq!(filled.pixels().len(), 24);
        assert_eq!(filled.pixel(2, 1), Some([9, 8, 7, 255]));

        let blank = Raster::blank(3, 2).unwrap();
        assert!(blank.pixels().iter().all(|&b| b == 0));
        assert!(!blank.is_empty());
        assert!(Raster::blank(0, 5).unwrap().is_empty());
    }

    #[test]
    fn test_rgba_image_conversion() {
        let raster = Raster::filled(4, 3, [1, 2, 3, 4]).unwrap();
        let img = raster.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(Raster::from_rgba_image(img), raster);
    }

    #[test]
    fn test_dimension_check() {
        let a = Raster::blank(2, 3).unwrap();
        let b = Raster::blank(3, 2).unwrap();
        assert!(a.ensure_same_dimensions(&a.clone()).is_ok());
        assert!(matches!(
            a.ensure_same_dimensions(&b),
            Err(TransformError::DimensionMismatch { .. })
        ));
    }
}

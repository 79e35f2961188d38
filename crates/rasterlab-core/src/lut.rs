//! 256-entry look-up tables for point operations.
//!
//! Every point transform reduces to "build a [`Lut`], then remap each colour
//! channel through it". Tables are built fresh per call; the only cached
//! table is the negative, which is an immutable constant.

use std::sync::OnceLock;

use crate::error::{TransformError, TransformResult};
use crate::histogram::{CumulativeHistogram, BINS};
use crate::ControlPoint;

/// Pre-computed mapping from input level to output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lut {
    /// LUT values: table[input] = output
    pub table: [u8; BINS],
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl Lut {
    pub fn from_table(table: [u8; BINS]) -> Self {
        Self { table }
    }

    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        let mut table = [0u8; BINS];
        for (i, v) in table.iter_mut().enumerate() {
            *v = i as u8;
        }
        Self { table }
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    #[inline]
    pub fn map(&self, level: u8) -> u8 {
        self.table[level as usize]
    }

    /// `255 - i`, built once on first use.
    pub fn negative() -> &'static Lut {
        static NEGATIVE: OnceLock<Lut> = OnceLock::new();
        NEGATIVE.get_or_init(|| {
            let mut table = [0u8; BINS];
            for (i, v) in table.iter_mut().enumerate() {
                *v = 255 - i as u8;
            }
            Lut { table }
        })
    }

    /// `round(255 * (i / 255)^gamma)`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] for a gamma that is not a
    /// positive finite number.
    pub fn gamma(gamma: f64) -> TransformResult<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(TransformError::InvalidParameter(format!(
                "gamma must be a positive finite number, got {gamma}"
            )));
        }
        let mut table = [0u8; BINS];
        for (i, v) in table.iter_mut().enumerate() {
            let normalized = i as f64 / 255.0;
            *v = (normalized.powf(gamma) * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        Ok(Self { table })
    }

    /// Linear rescale taking `(brightness, contrast)` from `current` to `target`.
    ///
    /// `A = target.contrast / current.contrast`, `B = target.brightness - A * current.brightness`,
    /// `table[i] = clamp(A*i + B, 0, 255)` truncated toward zero.
    ///
    /// # Errors
    ///
    /// - [`TransformError::DivisionByZero`] when the current contrast is zero
    /// - [`TransformError::InvalidParameter`] for negative or non-finite targets
    pub fn brightness_contrast(
        current_brightness: f64,
        current_contrast: f64,
        brightness: f64,
        contrast: f64,
    ) -> TransformResult<Self> {
        if !brightness.is_finite() || brightness < 0.0 {
            return Err(TransformError::InvalidParameter(format!(
                "brightness must be a non-negative finite number, got {brightness}"
            )));
        }
        if !contrast.is_finite() || contrast < 0.0 {
            return Err(TransformError::InvalidParameter(format!(
                "contrast must be a non-negative finite number, got {contrast}"
            )));
        }
        if current_contrast == 0.0 || !current_contrast.is_finite() {
            return Err(TransformError::DivisionByZero(
                "source image has zero contrast".to_string(),
            ));
        }

        let a = contrast / current_contrast;
        let b = brightness - a * current_brightness;
        let mut table = [0u8; BINS];
        for (i, v) in table.iter_mut().enumerate() {
            *v = (a * i as f64 + b).clamp(0.0, 255.0) as u8;
        }
        Ok(Self { table })
    }

    /// Piecewise-linear mapping through user control points.
    ///
    /// Points are sorted by x (ties: higher y first), padded with `(0, 0)` and
    /// `(255, 255)` when those ends are missing, and joined segment by segment.
    /// A segment whose ends share an x gets its right end moved one step right.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] if a coordinate lies
    /// outside 0..=255.
    pub fn piecewise_linear(points: &[ControlPoint]) -> TransformResult<Self> {
        for point in points {
            point.validate()?;
        }

        let mut points = points.to_vec();
        points.sort_by(|a, b| a.x.cmp(&b.x).then(b.y.cmp(&a.y)));
        if points.first().map_or(true, |p| p.x != 0) {
            points.insert(0, ControlPoint::new(0, 0));
        }
        if points.last().map_or(true, |p| p.x != 255) {
            points.push(ControlPoint::new(255, 255));
        }

        let mut table = [0u8; BINS];
        for i in 0..points.len() - 1 {
            let p1 = points[i];
            if points[i + 1].x == p1.x {
                points[i + 1].x += 1;
            }
            let p2 = points[i + 1];

            let m = (p2.y - p1.y) as f64 / (p2.x - p1.x) as f64;
            let n = p1.y as f64 - m * p1.x as f64;
            for x in p1.x..p2.x.min(BINS as i32) {
                table[x as usize] = (m * x as f64 + n).round().clamp(0.0, 255.0) as u8;
            }
        }
        if let Some(last) = points.last() {
            table[255] = last.y as u8;
        }

        Ok(Self { table })
    }

    /// Histogram equalization table for one channel.
    ///
    /// `table[i] = max(0, round(cumulative[i] * 256 / pixel_count - 1))`.
    /// An empty image yields the identity.
    pub fn equalization(cumulative: &CumulativeHistogram, pixel_count: usize) -> Self {
        if pixel_count == 0 {
            return Self::identity();
        }
        let n = pixel_count as f64;
        let mut table = [0u8; BINS];
        for (v, &cum) in table.iter_mut().zip(cumulative.bins().iter()) {
            *v = (cum as f64 * BINS as f64 / n - 1.0).round().clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    /// Histogram matching table for one channel.
    ///
    /// For each source level `a`, the output is the largest `j` with
    /// `source_cdf[a] > reference_cdf[j]`, or 0 when no such `j` exists.
    /// CDFs are cumulative counts over pixel counts, compared exactly by
    /// cross-multiplying.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] if either pixel count is zero.
    pub fn histogram_match(
        source: &CumulativeHistogram,
        source_pixels: usize,
        reference: &CumulativeHistogram,
        reference_pixels: usize,
    ) -> TransformResult<Self> {
        if source_pixels == 0 || reference_pixels == 0 {
            return Err(TransformError::InvalidParameter(
                "histogram matching requires non-empty images".to_string(),
            ));
        }
        let src_n = source_pixels as u64;
        let ref_n = reference_pixels as u64;

        let mut table = [0u8; BINS];
        for (a, v) in table.iter_mut().enumerate() {
            let src = source.bins()[a] as u64 * ref_n;
            *v = reference
                .bins()
                .iter()
                .rposition(|&r| src > r as u64 * src_n)
                .unwrap_or(0) as u8;
        }
        Ok(Self { table })
    }
}

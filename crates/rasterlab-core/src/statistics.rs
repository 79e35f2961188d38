//! Per-raster statistics derived from the channel histograms.

use crate::histogram::{
    compute_histograms, Channels, CumulativeHistogram, Histogram, NormalizedHistogram, BINS,
};
use crate::raster::Raster;

/// Statistics of one raster. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStatistics {
    pub width: u32,
    pub height: u32,
    /// Total pixels, transparent ones included.
    pub pixel_count: usize,
    pub histograms: Channels<Histogram>,
    pub cumulative: Channels<CumulativeHistogram>,
    pub normalized: Channels<NormalizedHistogram>,
    /// Mean gray level.
    pub brightness: f64,
    /// Population standard deviation of the gray level.
    pub contrast: f64,
    /// Lowest occupied gray level.
    pub min_color: Option<u8>,
    /// Highest occupied gray level.
    pub max_color: Option<u8>,
    /// `ceil(log2(number_of_colors))`, see [`entropy_and_colors`].
    pub entropy: u32,
    /// Number of occupied gray levels.
    pub number_of_colors: usize,
}

impl ImageStatistics {
    /// Span between the darkest and brightest occupied gray levels.
    pub fn range(&self) -> Option<u8> {
        match (self.min_color, self.max_color) {
            (Some(min), Some(max)) => Some(max - min),
            _ => None,
        }
    }
}

/// Compute every statistic of `raster` from a single histogram pass.
pub fn compute_statistics(raster: &Raster) -> ImageStatistics {
    let pixel_count = raster.pixel_count();
    let histograms = compute_histograms(raster);
    let cumulative = histograms.map(Histogram::cumulative);
    let normalized = histograms.map(|h| h.normalized(pixel_count));

    let brightness = brightness(&histograms.gray, pixel_count);
    let contrast = contrast(&histograms.gray, pixel_count, brightness);
    let (entropy, number_of_colors) = entropy_and_colors(&histograms.gray);

    log::debug!(
        "statistics {}x{}: brightness={:.3} contrast={:.3} colors={}",
        raster.width(),
        raster.height(),
        brightness,
        contrast,
        number_of_colors
    );

    ImageStatistics {
        width: raster.width(),
        height: raster.height(),
        pixel_count,
        min_color: histograms.gray.min_occupied(),
        max_color: histograms.gray.max_occupied(),
        histograms,
        cumulative,
        normalized,
        brightness,
        contrast,
        entropy,
        number_of_colors,
    }
}

/// `Σ level·count / pixel_count`. Zero for an empty raster.
pub fn brightness(gray: &Histogram, pixel_count: usize) -> f64 {
    if pixel_count == 0 {
        return 0.0;
    }
    let sum: f64 = (0..BINS)
        .map(|level| level as f64 * gray.bins()[level] as f64)
        .sum();
    sum / pixel_count as f64
}

/// `sqrt(Σ count·(level − brightness)² / pixel_count)`. Zero for an empty raster.
pub fn contrast(gray: &Histogram, pixel_count: usize, brightness: f64) -> f64 {
    if pixel_count == 0 {
        return 0.0;
    }
    let sum: f64 = (0..BINS)
        .map(|level| {
            let d = level as f64 - brightness;
            gray.bins()[level] as f64 * d * d
        })
        .sum();
    (sum / pixel_count as f64).sqrt()
}

/// Entropy and occupied-level count of a gray histogram.
///
/// Every occupied level is given the same probability `1 / number_of_colors`
/// rather than its empirical frequency, so the result is
/// `ceil(log2(number_of_colors))` whatever the distribution looks like.
pub fn entropy_and_colors(gray: &Histogram) -> (u32, usize) {
    let number_of_colors = gray.occupied_levels();
    if number_of_colors == 0 {
        return (0, 0);
    }
    let probability = 1.0 / number_of_colors as f64;
    let sum: f64 = gray
        .bins()
        .iter()
        .filter(|&&c| c != 0)
        .map(|_| probability * probability.log2())
        .sum();
    ((-sum).ceil().max(0.0) as u32, number_of_colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_2x2() -> Raster {
        Raster::new(
            2,
            2,
            vec![
                10, 10, 10, 255, 20, 20, 20, 255, //
                30, 30, 30, 255, 40, 40, 40, 255,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_gray_2x2_scenario() {
        let stats = compute_statistics(&gray_2x2());

        for level in [10, 20, 30, 40] {
            assert_eq!(stats.histograms.gray.at(level), Some(1));
        }
        assert_eq!(stats.histograms.gray.total(), 4);
        assert!((stats.brightness - 25.0).abs() < 1e-12);
        // sqrt((225 + 25 + 25 + 225) / 4)
        assert!((stats.contrast - 125f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min_color, Some(10));
        assert_eq!(stats.max_color, Some(40));
        assert_eq!(stats.range(), Some(30));
        assert_eq!(stats.number_of_colors, 4);
        assert_eq!(stats.entropy, 2);
        assert_eq!(stats.pixel_count, 4);
    }

    #[test]
    fn test_cumulative_and_normalized_families() {
        let stats = compute_statistics(&gray_2x2());
        assert_eq!(stats.cumulative.gray.at(10), Some(0));
        assert_eq!(stats.cumulative.gray.at(11), Some(1));
        assert_eq!(stats.cumulative.red.at(41), Some(4));
        assert_eq!(stats.normalized.blue.at(30), Some(0.25));
    }

    #[test]
    fn test_entropy_ignores_distribution_shape() {
        let mut skewed = Histogram::new();
        for _ in 0..1000 {
            skewed.increment(0);
        }
        skewed.increment(1);
        skewed.increment(2);
        // three occupied levels: ceil(log2 3) = 2
        assert_eq!(entropy_and_colors(&skewed), (2, 3));

        let mut single = Histogram::new();
        single.increment(128);
        assert_eq!(entropy_and_colors(&single), (0, 1));

        let full = Histogram::from_bins([1; BINS]);
        assert_eq!(entropy_and_colors(&full), (8, 256));
    }

    #[test]
    fn test_transparent_pixels_dilute_brightness() {
        // One opaque pixel at 100 and one transparent pixel: brightness is
        // divided by the total pixel count.
        let raster = Raster::new(2, 1, vec![100, 100, 100, 255, 200, 200, 200, 0]).unwrap();
        let stats = compute_statistics(&raster);
        assert_eq!(stats.histograms.gray.total(), 1);
        assert!((stats.brightness - 50.0).abs() < 1e-12);
        assert_eq!(stats.normalized.gray.at(100), Some(0.5));
    }

    #[test]
    fn test_empty_raster() {
        let stats = compute_statistics(&Raster::blank(0, 0).unwrap());
        assert_eq!(stats.brightness, 0.0);
        assert_eq!(stats.contrast, 0.0);
        assert_eq!(stats.min_color, None);
        assert_eq!(stats.range(), None);
        assert_eq!(stats.entropy, 0);
        assert_eq!(stats.number_of_colors, 0);
    }

    #[test]
    fn test_flat_image_has_zero_contrast() {
        let raster = Raster::filled(5, 5, [77, 77, 77, 255]).unwrap();
        let stats = compute_statistics(&raster);
        assert!((stats.brightness - 77.0).abs() < 1e-12);
        assert_eq!(stats.contrast, 0.0);
    }
}

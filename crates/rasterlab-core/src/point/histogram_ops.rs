//! Histogram-driven point operations.

use super::apply_channel_luts;
use crate::error::TransformResult;
use crate::lut::Lut;
use crate::raster::Raster;
use crate::statistics::ImageStatistics;

/// Flatten each colour channel's histogram using its own cumulative counts.
///
/// `stats` must describe `raster`.
pub fn equalize(raster: &Raster, stats: &ImageStatistics) -> Raster {
    log::debug!("equalize {}x{}", raster.width(), raster.height());
    let [r, g, b] = stats
        .cumulative
        .rgb()
        .map(|cum| Lut::equalization(cum, stats.pixel_count));
    apply_channel_luts(raster, [&r, &g, &b])
}

/// Reshape each colour channel's histogram towards a reference image's.
///
/// `stats` must describe `raster`; `reference` describes the image whose
/// distribution is copied.
///
/// # Errors
///
/// Returns `InvalidParameter` when either image has no pixels.
pub fn match_histogram(
    raster: &Raster,
    stats: &ImageStatistics,
    reference: &ImageStatistics,
) -> TransformResult<Raster> {
    log::debug!(
        "histogram match {}x{} against {}x{}",
        raster.width(),
        raster.height(),
        reference.width,
        reference.height
    );
    let src = stats.cumulative.rgb();
    let dst = reference.cumulative.rgb();
    let mut luts = [Lut::identity(); 3];
    for (i, lut) in luts.iter_mut().enumerate() {
        *lut = Lut::histogram_match(src[i], stats.pixel_count, dst[i], reference.pixel_count)?;
    }
    Ok(apply_channel_luts(raster, [&luts[0], &luts[1], &luts[2]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::statistics::compute_statistics;

    /// Every level 0..=255 once per row, in `rows` rows.
    fn ramp(rows: u32) -> Raster {
        let mut pixels = Vec::new();
        for _ in 0..rows {
            for v in 0..=255u8 {
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Raster::new(256, rows, pixels).unwrap()
    }

    #[test]
    fn test_equalize_uniform_ramp_shifts_by_one() {
        let raster = ramp(2);
        let out = equalize(&raster, &compute_statistics(&raster));
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(out.pixel(1, 0), Some([0, 0, 0, 255]));
        assert_eq!(out.pixel(200, 1), Some([199, 199, 199, 255]));
    }

    #[test]
    fn test_equalize_spreads_narrow_range() {
        // Half the pixels at 100, half at 101.
        let mut pixels = Vec::new();
        for i in 0..16 {
            let v = if i < 8 { 100 } else { 101 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
        let raster = Raster::new(4, 4, pixels).unwrap();
        let out = equalize(&raster, &compute_statistics(&raster));
        // level 100: cum = 0 -> 0; level 101: cum = 8 -> round(8*256/16 - 1) = 127
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(out.pixel(3, 3), Some([127, 127, 127, 255]));
    }

    #[test]
    fn test_equalize_per_channel() {
        let raster = Raster::new(2, 1, vec![0, 50, 200, 255, 255, 60, 100, 255]).unwrap();
        let out = equalize(&raster, &compute_statistics(&raster));
        // Each channel has two distinct levels: the higher one maps to 127.
        assert_eq!(out.pixel(0, 0), Some([0, 0, 127, 255]));
        assert_eq!(out.pixel(1, 0), Some([127, 127, 0, 255]));
    }

    #[test]
    fn test_match_histogram_towards_bright_reference() {
        let dark = Raster::new(2, 1, vec![10, 10, 10, 255, 20, 20, 20, 255]).unwrap();
        let bright = Raster::filled(3, 3, [200, 200, 200, 255]).unwrap();
        let out = match_histogram(
            &dark,
            &compute_statistics(&dark),
            &compute_statistics(&bright),
        )
        .unwrap();
        // Level 10 has srcCDF 0 and falls back to 0; level 20 has srcCDF 1/2,
        // above refCDF[j] = 0 for every j <= 200.
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(out.pixel(1, 0), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_match_histogram_empty_reference() {
        let raster = Raster::filled(2, 2, [1, 2, 3, 255]).unwrap();
        let empty = Raster::blank(0, 0).unwrap();
        let err = match_histogram(
            &raster,
            &compute_statistics(&raster),
            &compute_statistics(&empty),
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameter(_)));
    }
}

//! 256-bin channel histograms and their derived forms.
//!
//! Counting rules:
//!
//! - pixels with alpha == 0 are not counted in any histogram
//! - the gray histogram bins the rounded PAL luma of each counted pixel
//! - cumulative bins hold the sum of all bins *strictly below* the index, so
//!   `cumulative[0]` is always 0
//! - normalized bins divide by the raster's total pixel count, transparent
//!   pixels included

use serde::{Deserialize, Serialize};

use crate::luminance::luma_u8;
use crate::parallel::fold_rows;
use crate::raster::Raster;

/// Number of intensity levels in an 8-bit channel.
pub const BINS: usize = 256;

/// Channel selector for per-channel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Gray,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Gray, Channel::Red, Channel::Green, Channel::Blue];
}

/// One value per channel: gray plus red, green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Channels<T> {
    pub gray: T,
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> Channels<T> {
    pub fn get(&self, channel: Channel) -> &T {
        match channel {
            Channel::Gray => &self.gray,
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Apply `f` to every channel.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Channels<U> {
        Channels {
            gray: f(&self.gray),
            red: f(&self.red),
            green: f(&self.green),
            blue: f(&self.blue),
        }
    }

    /// The colour channels in R, G, B order.
    pub fn rgb(&self) -> [&T; 3] {
        [&self.red, &self.green, &self.blue]
    }
}

/// Pixel counts per intensity level for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram {
    bins: [u32; BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: [0; BINS] }
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bins(bins: [u32; BINS]) -> Self {
        Self { bins }
    }

    /// Count at `level`, or `None` for a level outside 0..=255.
    pub fn at(&self, level: usize) -> Option<u32> {
        self.bins.get(level).copied()
    }

    pub fn bins(&self) -> &[u32; BINS] {
        &self.bins
    }

    #[inline]
    pub fn increment(&mut self, level: u8) {
        self.bins[level as usize] += 1;
    }

    /// Add another histogram's counts into this one.
    pub fn merge(&mut self, other: &Histogram) {
        for (a, b) in self.bins.iter_mut().zip(other.bins.iter()) {
            *a += b;
        }
    }

    /// Sum of all bins.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Lowest level with a non-zero count.
    pub fn min_occupied(&self) -> Option<u8> {
        self.bins.iter().position(|&c| c != 0).map(|i| i as u8)
    }

    /// Highest level with a non-zero count.
    pub fn max_occupied(&self) -> Option<u8> {
        self.bins.iter().rposition(|&c| c != 0).map(|i| i as u8)
    }

    /// Number of levels with a non-zero count.
    pub fn occupied_levels(&self) -> usize {
        self.bins.iter().filter(|&&c| c != 0).count()
    }

    /// Running sum of all bins strictly below each index.
    pub fn cumulative(&self) -> CumulativeHistogram {
        let mut bins = [0u32; BINS];
        let mut running = 0u32;
        for (cum, &count) in bins.iter_mut().zip(self.bins.iter()) {
            *cum = running;
            running += count;
        }
        CumulativeHistogram { bins }
    }

    /// Each bin divided by `pixel_count`. All zero when `pixel_count` is zero.
    pub fn normalized(&self, pixel_count: usize) -> NormalizedHistogram {
        let mut bins = [0.0f64; BINS];
        if pixel_count > 0 {
            let n = pixel_count as f64;
            for (p, &count) in bins.iter_mut().zip(self.bins.iter()) {
                *p = count as f64 / n;
            }
        }
        NormalizedHistogram { bins }
    }
}

/// `bins[i]` = number of counted pixels with a level below `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeHistogram {
    bins: [u32; BINS],
}

impl CumulativeHistogram {
    pub fn at(&self, level: usize) -> Option<u32> {
        self.bins.get(level).copied()
    }

    pub fn bins(&self) -> &[u32; BINS] {
        &self.bins
    }
}

/// Histogram counts as fractions of the raster's pixel count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedHistogram {
    bins: [f64; BINS],
}

impl NormalizedHistogram {
    pub fn at(&self, level: usize) -> Option<f64> {
        self.bins.get(level).copied()
    }

    pub fn bins(&self) -> &[f64; BINS] {
        &self.bins
    }
}

/// Build the gray, red, green and blue histograms of `raster` in one pass.
pub fn compute_histograms(raster: &Raster) -> Channels<Histogram> {
    fold_rows(
        raster.pixels(),
        raster.stride(),
        Channels::<Histogram>::default,
        |mut acc, row| {
            for px in row.chunks_exact(4) {
                if px[3] == 0 {
                    continue;
                }
                acc.red.increment(px[0]);
                acc.green.increment(px[1]);
                acc.blue.increment(px[2]);
                acc.gray.increment(luma_u8(px[0], px[1], px[2]));
            }
            acc
        },
        |mut a, b| {
            a.gray.merge(&b.gray);
            a.red.merge(&b.red);
            a.green.merge(&b.green);
            a.blue.merge(&b.blue);
            a
        },
    )
}

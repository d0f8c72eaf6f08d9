use std::{ops::Range, str::FromStr};

use serde::Serialize;

use crate::percentiles;

/// Upper bound on the number of bins of any histogram.
pub const MAX_BINS: usize = 10_000;

/// How many bins a histogram should use.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinCount {
    /// Picks the narrower of the Sturges and Freedman-Diaconis bin widths.
    #[default]
    Auto,
    /// Exactly this many bins, capped at [`MAX_BINS`]. Zero yields an empty
    /// histogram.
    Fixed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid bin count '{input}': expected 'auto' or an integer between 1 and 10000")]
pub struct ParseBinCountError {
    input: String,
}

impl FromStr for BinCount {
    type Err = ParseBinCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        match s.parse::<usize>() {
            Ok(n) if (1..=MAX_BINS).contains(&n) => Ok(Self::Fixed(n)),
            _ => Err(ParseBinCountError {
                input: s.to_owned(),
            }),
        }
    }
}

impl BinCount {
    /// Resolves the number of bins for the given sorted data.
    ///
    /// `Auto` falls back to the Sturges bin count when the narrower width
    /// would need more than [`MAX_BINS`] bins, which happens on heavily
    /// skewed data.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn resolve(self, sorted_values: &[f64]) -> usize {
        let n = match self {
            Self::Fixed(n) => return n.min(MAX_BINS),
            Self::Auto => sorted_values.len(),
        };
        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return 0;
        };
        let range = max - min;
        if range <= 0.0 {
            return 1;
        }

        let n = n as f64;
        let sturges_width = range / (n.log2() + 1.0);
        let iqr = percentiles::interpolate(sorted_values, 75.0)
            - percentiles::interpolate(sorted_values, 25.0);
        let fd_width = 2.0 * iqr / n.cbrt();
        // FD collapses to zero width when the middle half of the data is constant
        let width = if fd_width > 0.0 {
            fd_width.min(sturges_width)
        } else {
            sturges_width
        };
        let bins = (range / width).ceil();
        if bins > MAX_BINS as f64 {
            // Sturges bin count
            return (n.log2() + 1.0).ceil() as usize;
        }
        (bins as usize).max(1)
    }
}

/// Equal-width histogram data for a numeric sample.
///
/// Bins cover `[min, max]` of the data. Each bin range is half-open except the
/// last one, which also contains the maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varstat_stats::histogram::{BinCount, Histogram};
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(values, BinCount::Fixed(3));
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, bins: BinCount) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, bins)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], bins: BinCount) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let num_bins = bins.resolve(sorted_values);
        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        // A single repeated value gets a unit-wide span centred on it
        let (start, end) = if max > min {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        };
        let span = end - start;
        let edge = |idx: usize| {
            if idx == num_bins {
                end
            } else {
                start + span * (idx as f64) / (num_bins as f64)
            }
        };

        let mut bins = (0..num_bins)
            .map(|idx| HistogramBin {
                range: edge(idx)..edge(idx + 1),
                count: 0,
            })
            .collect::<Vec<_>>();

        let bin_width = span / num_bins as f64;
        for &val in sorted_values {
            let idx = (((val - start) / bin_width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

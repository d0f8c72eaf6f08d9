use serde::Serialize;

/// Error returned when a percentile argument lies outside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("percentile must be between 0 and 100, got {percentile}")]
pub struct OutOfRangeError {
    /// The rejected argument.
    pub percentile: f64,
}

/// A single percentile-value pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentilePoint {
    /// The percentile, in `[0, 100]`.
    pub percentile: f64,
    /// The interpolated value at that percentile.
    pub value: f64,
}

/// Precomputed percentile values for a dataset.
///
/// # Examples
///
/// ```
/// use varstat_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(percentiles.get(50.0), Some(5.5));
/// assert_eq!(percentiles.get(25.0), Some(3.25));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Percentiles {
    /// Points in the order they were requested.
    points: Vec<PercentilePoint>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for the first point outside `[0, 100]`.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(
        sorted_values: &[f64],
        percentile_points: &[f64],
    ) -> Result<Self, OutOfRangeError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let points = percentile_points
            .iter()
            .map(|&percentile| {
                compute_percentile(sorted_values, percentile)
                    .map(|value| PercentilePoint { percentile, value })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { points })
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Result<Self, OutOfRangeError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use varstat_stats::percentiles::Percentiles;
    ///
    /// let percentiles = Percentiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[50.0, 95.0]).unwrap();
    ///
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|point| (point.percentile - percentile).abs() < f64::EPSILON)
            .map(|point| point.value)
    }

    /// Returns an iterator over all percentile-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = PercentilePoint> + '_ {
        self.points.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PercentilePoint] {
        &self.points
    }
}

/// Computes a single percentile from sorted data using linear interpolation.
///
/// The percentile `p` is located at the fractional index `(p / 100) * (n - 1)`.
/// An integral index selects that element directly; otherwise the result is
/// interpolated between the neighbouring elements, weighted by the fractional
/// part. An empty input yields `0.0`.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `percentile` is outside `[0, 100]` or NaN.
///
/// # Examples
///
/// ```
/// use varstat_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 0.0).unwrap(), 1.0);
/// assert_eq!(compute_percentile(&values, 50.0).unwrap(), 2.5);
/// assert!(compute_percentile(&values, 150.0).is_err());
/// ```
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> Result<f64, OutOfRangeError> {
    if !(0.0..=100.0).contains(&percentile) {
        return Err(OutOfRangeError { percentile });
    }
    Ok(interpolate(sorted_values, percentile))
}

/// Percentile lookup for arguments already known to be in range.
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub(crate) fn interpolate(sorted_values: &[f64], percentile: f64) -> f64 {
    debug_assert!((0.0..=100.0).contains(&percentile));
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return 0.0;
    };

    let index = percentile / 100.0 * last as f64;
    let lower = index.floor();
    let fraction = index - lower;
    let lower = lower as usize;
    if fraction <= 0.0 || lower >= last {
        return sorted_values[lower.min(last)];
    }
    let (low, high) = (sorted_values[lower], sorted_values[lower + 1]);
    low + (high - low) * fraction
}

/// Median of sorted data: the middle element for odd lengths, the mean of the
/// two central elements for even lengths, and `0.0` when empty.
#[must_use]
pub fn compute_median(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted_values[mid]
    } else {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    }
}

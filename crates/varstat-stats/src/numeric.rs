use serde::Serialize;

use crate::{
    box_plot::BoxPlot,
    histogram::{BinCount, Histogram},
    percentiles::{self, OutOfRangeError, Percentiles},
    raw::{RawColumn, RawValue},
};

/// Multiplier applied to the interquartile range to place the Tukey fences.
pub const TUKEY_FENCE_FACTOR: f64 = 1.5;

/// Error returned when a numeric sample is built from non-numeric data.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("variable '{name}' does not look quantitative: '{value}' is not a number")]
pub struct KindMismatchError {
    /// Resolved name of the variable being built.
    pub name: String,
    /// The first value that could not be coerced.
    pub value: String,
}

/// Which denominator to use for variance and standard deviation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Estimator {
    /// Divide by `n - 1` (Bessel's correction).
    #[default]
    Sample,
    /// Divide by `n`.
    Population,
}

/// A cleaned, immutable sequence of finite observations with a display name.
///
/// Every statistic is recomputed from `values` on each call; nothing is cached.
/// Small samples never produce errors: each statistic has a defined fallback
/// (usually `0.0`) below its minimum sample size.
///
/// # Examples
///
/// ```
/// use varstat_stats::numeric::{Estimator, NumericSample};
///
/// let sample = NumericSample::from_f64s([1.0, 2.0, 3.0, 4.0, 5.0], None);
/// assert_eq!(sample.name(), "Unnamed");
/// assert_eq!(sample.variance(Estimator::Sample), 2.5);
/// assert_eq!(sample.variance(Estimator::Population), 2.0);
/// assert_eq!(sample.range(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSample {
    name: String,
    values: Vec<f64>,
}

/// First, second and third quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    /// Always equal to the median.
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// `q3 - q1`.
    #[must_use]
    pub fn interquartile_range(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Observations lying strictly outside the Tukey fences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outliers {
    /// `Q1 - 1.5 * IQR`.
    pub lower_fence: f64,
    /// `Q3 + 1.5 * IQR`.
    pub upper_fence: f64,
    /// Values below the lower fence, in sample order.
    pub lower: Vec<f64>,
    /// Values above the upper fence, in sample order.
    pub upper: Vec<f64>,
}

impl Outliers {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }
}

/// Every statistic of a [`NumericSample`] gathered into one report.
///
/// `coefficient_of_variation` is `+inf` when the mean is zero; JSON encoders
/// emit that as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub population_variance: f64,
    pub population_std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub coefficient_of_variation: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub quartiles: Quartiles,
    pub interquartile_range: f64,
    pub outliers: Outliers,
}

impl NumericSample {
    /// Builds a sample from raw observations.
    ///
    /// Missing cells and non-finite numbers are dropped. Text that parses as a
    /// number is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`KindMismatchError`] if any remaining value is not numeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use varstat_stats::{numeric::NumericSample, raw::RawValue};
    ///
    /// let values = [RawValue::from(3.0), RawValue::Missing, RawValue::from("4.5")];
    /// let sample = NumericSample::new(values, Some("income")).unwrap();
    /// assert_eq!(sample.values(), &[3.0, 4.5]);
    ///
    /// let values = [RawValue::from(3.0), RawValue::from("high")];
    /// assert!(NumericSample::new(values, None).is_err());
    /// ```
    pub fn new<I>(values: I, name: Option<&str>) -> Result<Self, KindMismatchError>
    where
        I: IntoIterator<Item = RawValue>,
    {
        Self::from_column(values.into_iter().collect(), name)
    }

    /// Builds a sample from a raw column, falling back to the column's own
    /// name when `name` is `None`.
    pub fn from_column(column: RawColumn, name: Option<&str>) -> Result<Self, KindMismatchError> {
        let name = crate::resolve_name(name, column.name.as_deref());
        match coerce_numeric(&column.values) {
            Ok(values) => Ok(Self::from_parts(name, values)),
            Err(value) => Err(KindMismatchError {
                name,
                value: value.to_owned(),
            }),
        }
    }

    /// Builds a sample from values that are already numeric.
    ///
    /// Non-finite values are dropped.
    #[must_use]
    pub fn from_f64s<I>(values: I, name: Option<&str>) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_parts(
            crate::resolve_name(name, None),
            values.into_iter().collect(),
        )
    }

    pub(crate) fn from_parts(name: String, mut values: Vec<f64>) -> Self {
        let before = values.len();
        values.retain(|value| value.is_finite());
        if values.len() < before {
            tracing::debug!(
                variable = %name,
                dropped = before - values.len(),
                "dropped non-finite observations"
            );
        }
        Self { name, values }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cleaned observations, in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Arithmetic mean, or `0.0` for an empty sample.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Sum of squared deviations from the mean divided by `n - 1`
    /// ([`Estimator::Sample`]) or `n` ([`Estimator::Population`]).
    ///
    /// Returns `0.0` when `n < 2` for the sample estimator and when `n < 1` for
    /// the population estimator.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn variance(&self, estimator: Estimator) -> f64 {
        let n = self.values.len();
        let denominator = match estimator {
            Estimator::Sample if n < 2 => return 0.0,
            Estimator::Population if n < 1 => return 0.0,
            Estimator::Sample => n - 1,
            Estimator::Population => n,
        };
        let mean = self.mean();
        let sum_of_squares = self
            .values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>();
        sum_of_squares / denominator as f64
    }

    /// Square root of [`variance`](Self::variance).
    #[must_use]
    pub fn std_dev(&self, estimator: Estimator) -> f64 {
        self.variance(estimator).sqrt()
    }

    /// Median, or `0.0` for an empty sample.
    #[must_use]
    pub fn median(&self) -> f64 {
        percentiles::compute_median(&self.sorted_values())
    }

    /// Linearly interpolated percentile, or `0.0` for an empty sample.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `p` is outside `[0, 100]`.
    pub fn percentile(&self, p: f64) -> Result<f64, OutOfRangeError> {
        percentiles::compute_percentile(&self.sorted_values(), p)
    }

    /// Computes several percentiles at once.
    pub fn percentiles(&self, points: &[f64]) -> Result<Percentiles, OutOfRangeError> {
        Percentiles::from_sorted(&self.sorted_values(), points)
    }

    /// Smallest observation, or `0.0` for an empty sample.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    /// Largest observation, or `0.0` for an empty sample.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// `max - min`, or `0.0` for an empty sample.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Sample standard deviation relative to the absolute mean, in percent.
    ///
    /// Returns `+inf` when the mean is exactly zero.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> f64 {
        let mean = self.mean();
        if mean == 0.0 {
            return f64::INFINITY;
        }
        self.std_dev(Estimator::Sample) / mean.abs() * 100.0
    }

    /// Bias-corrected skewness:
    /// `n / ((n - 1)(n - 2)) * sum(((x - mean) / sigma)^3)` where `sigma` is the
    /// population standard deviation.
    ///
    /// Returns `0.0` when `n < 3` or `sigma == 0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn skewness(&self) -> f64 {
        let Some((mean, sigma)) = self.standardization(3) else {
            return 0.0;
        };
        let n = self.values.len() as f64;
        let third_moment = self
            .values
            .iter()
            .map(|value| ((value - mean) / sigma).powi(3))
            .sum::<f64>();
        n / ((n - 1.0) * (n - 2.0)) * third_moment
    }

    /// Excess kurtosis: `sum(((x - mean) / sigma)^4) / n - 3` where `sigma` is
    /// the population standard deviation.
    ///
    /// Returns `0.0` when `n < 4` or `sigma == 0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn kurtosis(&self) -> f64 {
        let Some((mean, sigma)) = self.standardization(4) else {
            return 0.0;
        };
        let n = self.values.len() as f64;
        let fourth_moment = self
            .values
            .iter()
            .map(|value| ((value - mean) / sigma).powi(4))
            .sum::<f64>();
        fourth_moment / n - 3.0
    }

    /// Mean and population standard deviation, if the sample has at least
    /// `min_count` values and non-zero spread.
    fn standardization(&self, min_count: usize) -> Option<(f64, f64)> {
        if self.values.len() < min_count {
            return None;
        }
        let sigma = self.std_dev(Estimator::Population);
        (sigma != 0.0).then(|| (self.mean(), sigma))
    }

    /// `Q1 = P25`, `Q2 = median`, `Q3 = P75`.
    #[must_use]
    pub fn quartiles(&self) -> Quartiles {
        quartiles_of_sorted(&self.sorted_values())
    }

    /// `Q3 - Q1`.
    #[must_use]
    pub fn interquartile_range(&self) -> f64 {
        self.quartiles().interquartile_range()
    }

    /// Partitions the observations lying strictly outside the Tukey fences.
    ///
    /// # Examples
    ///
    /// ```
    /// use varstat_stats::numeric::NumericSample;
    ///
    /// let sample = NumericSample::from_f64s([1.0, 1.0, 1.0, 1.0, 100.0], None);
    /// let outliers = sample.outliers();
    /// assert_eq!(outliers.upper, vec![100.0]);
    /// assert!(outliers.lower.is_empty());
    /// ```
    #[must_use]
    pub fn outliers(&self) -> Outliers {
        let (lower_fence, upper_fence) = tukey_fences(&self.quartiles());
        let lower = self
            .values
            .iter()
            .copied()
            .filter(|&value| value < lower_fence)
            .collect();
        let upper = self
            .values
            .iter()
            .copied()
            .filter(|&value| value > upper_fence)
            .collect();
        Outliers {
            lower_fence,
            upper_fence,
            lower,
            upper,
        }
    }

    /// Histogram bins covering the observations.
    #[must_use]
    pub fn histogram(&self, bins: BinCount) -> Histogram {
        Histogram::from_sorted(&self.sorted_values(), bins)
    }

    /// Box-plot geometry, or `None` for an empty sample.
    #[must_use]
    pub fn box_plot(&self) -> Option<BoxPlot> {
        BoxPlot::from_sorted(&self.sorted_values())
    }

    /// Gathers every statistic into one report.
    #[must_use]
    pub fn summary(&self) -> NumericSummary {
        let quartiles = self.quartiles();
        NumericSummary {
            name: self.name.clone(),
            count: self.count(),
            mean: self.mean(),
            median: self.median(),
            variance: self.variance(Estimator::Sample),
            std_dev: self.std_dev(Estimator::Sample),
            population_variance: self.variance(Estimator::Population),
            population_std_dev: self.std_dev(Estimator::Population),
            min: self.min(),
            max: self.max(),
            range: self.range(),
            coefficient_of_variation: self.coefficient_of_variation(),
            skewness: self.skewness(),
            kurtosis: self.kurtosis(),
            quartiles,
            interquartile_range: quartiles.interquartile_range(),
            outliers: self.outliers(),
        }
    }
}

pub(crate) fn quartiles_of_sorted(sorted_values: &[f64]) -> Quartiles {
    Quartiles {
        q1: percentiles::interpolate(sorted_values, 25.0),
        q2: percentiles::compute_median(sorted_values),
        q3: percentiles::interpolate(sorted_values, 75.0),
    }
}

pub(crate) fn tukey_fences(quartiles: &Quartiles) -> (f64, f64) {
    let iqr = quartiles.interquartile_range();
    (
        quartiles.q1 - TUKEY_FENCE_FACTOR * iqr,
        quartiles.q3 + TUKEY_FENCE_FACTOR * iqr,
    )
}

/// Coerces every present value to a number.
///
/// Missing cells are skipped. On failure returns the first offending text.
pub(crate) fn coerce_numeric(values: &[RawValue]) -> Result<Vec<f64>, &str> {
    values
        .iter()
        .filter_map(|value| match value {
            RawValue::Missing => None,
            RawValue::Number(number) if number.is_nan() => None,
            RawValue::Number(number) => Some(Ok(*number)),
            RawValue::Text(text) => Some(text.trim().parse::<f64>().map_err(|_| text.as_str())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn sample(values: &[f64]) -> NumericSample {
        NumericSample::from_f64s(values.iter().copied(), Some("test"))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn random_samples() -> impl Iterator<Item = Vec<f64>> {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);
        (0..200).map(move |_| {
            let len = rng.random_range(0..40);
            (0..len)
                .map(|_| rng.random_range(-1000.0..1000.0_f64).round() / 10.0)
                .collect()
        })
    }

    mod construction {
        use super::*;

        #[test]
        fn test_missing_values_are_dropped() {
            let values = [
                RawValue::Number(1.0),
                RawValue::Missing,
                RawValue::Number(f64::NAN),
                RawValue::from(" 2.5 "),
                RawValue::Number(f64::INFINITY),
            ];
            let sample = NumericSample::new(values, None).unwrap();
            assert_eq!(sample.values(), &[1.0, 2.5]);
            assert_eq!(sample.count(), 2);
        }

        #[test]
        fn test_text_is_kind_mismatch() {
            let column = RawColumn::parse_cells(Some("status".to_owned()), ["1", "single", "2"]);
            let err = NumericSample::from_column(column, None).unwrap_err();
            assert_eq!(err.name, "status");
            assert_eq!(err.value, "single");
        }

        #[test]
        fn test_name_resolution() {
            let column = RawColumn::parse_cells(Some("Monthly_Income".to_owned()), ["1"]);
            let named = NumericSample::from_column(column.clone(), Some("income")).unwrap();
            assert_eq!(named.name(), "income");
            let carried = NumericSample::from_column(column, None).unwrap();
            assert_eq!(carried.name(), "Monthly_Income");
            let unnamed = NumericSample::new([RawValue::Number(1.0)], None).unwrap();
            assert_eq!(unnamed.name(), crate::DEFAULT_NAME);
        }
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_one_to_five() {
            let s = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
            assert_eq!(s.mean(), 3.0);
            assert_eq!(s.median(), 3.0);
            assert_eq!(s.variance(Estimator::Sample), 2.5);
            assert_eq!(s.percentile(25.0), Ok(2.0));
            assert_eq!(s.range(), 4.0);
            assert_eq!(s.skewness(), 0.0);
            // Symmetric uniform grid: sum(z^4) / n = 1.7
            assert_close(s.kurtosis(), -1.3);
        }

        #[test]
        fn test_single_value_hits_small_n_guards() {
            let s = sample(&[10.0]);
            assert_eq!(s.variance(Estimator::Sample), 0.0);
            assert_eq!(s.variance(Estimator::Population), 0.0);
            assert_eq!(s.skewness(), 0.0);
            assert_eq!(s.kurtosis(), 0.0);
            assert_eq!(s.median(), 10.0);
            assert_eq!(s.percentile(90.0), Ok(10.0));
        }

        #[test]
        fn test_empty_sample_is_all_zero() {
            let s = sample(&[]);
            assert_eq!(s.count(), 0);
            assert_eq!(s.mean(), 0.0);
            assert_eq!(s.median(), 0.0);
            assert_eq!(s.range(), 0.0);
            assert_eq!(s.min(), 0.0);
            assert_eq!(s.max(), 0.0);
            assert_eq!(s.variance(Estimator::Sample), 0.0);
            assert_eq!(s.variance(Estimator::Population), 0.0);
            assert_eq!(s.percentile(50.0), Ok(0.0));
            assert_eq!(s.interquartile_range(), 0.0);
            assert!(s.outliers().is_empty());
            assert!(s.box_plot().is_none());
            assert!(s.histogram(BinCount::Auto).bins.is_empty());
            assert_eq!(s.coefficient_of_variation(), f64::INFINITY);
        }

        #[test]
        fn test_percentile_out_of_range() {
            let s = sample(&[1.0, 2.0]);
            assert_eq!(
                s.percentile(150.0),
                Err(OutOfRangeError { percentile: 150.0 })
            );
            assert!(s.percentiles(&[50.0, -1.0]).is_err());
        }

        #[test]
        fn test_upper_outlier() {
            let outliers = sample(&[1.0, 1.0, 1.0, 1.0, 100.0]).outliers();
            assert_eq!(outliers.upper, vec![100.0]);
            assert!(outliers.lower.is_empty());
            assert_eq!(outliers.len(), 1);
        }

        #[test]
        fn test_lower_outlier_keeps_sample_order() {
            let outliers = sample(&[
                -50.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, -60.0,
            ])
            .outliers();
            assert_eq!(outliers.lower, vec![-50.0, -60.0]);
            assert!(outliers.upper.is_empty());
        }
    }

    mod small_n_guards {
        use super::*;

        #[test]
        fn test_two_values() {
            let s = sample(&[2.0, 4.0]);
            assert_eq!(s.variance(Estimator::Sample), 2.0);
            assert_eq!(s.variance(Estimator::Population), 1.0);
            assert_eq!(s.median(), 3.0);
            assert_eq!(s.skewness(), 0.0);
            assert_eq!(s.kurtosis(), 0.0);
        }

        #[test]
        fn test_three_values_have_skewness_but_no_kurtosis() {
            let s = sample(&[1.0, 2.0, 6.0]);
            assert!(s.skewness() > 0.0);
            assert_eq!(s.kurtosis(), 0.0);
        }

        #[test]
        fn test_four_values_have_kurtosis() {
            // mean 4, sigma^2 = 50/4, sum((x - mean)^4) = 1394
            let s = sample(&[1.0, 2.0, 3.0, 10.0]);
            assert_close(s.kurtosis(), 1394.0 / 625.0 - 3.0);
        }

        #[test]
        fn test_constant_sample_has_no_shape() {
            let s = sample(&[7.0, 7.0, 7.0, 7.0, 7.0]);
            assert_eq!(s.std_dev(Estimator::Population), 0.0);
            assert_eq!(s.skewness(), 0.0);
            assert_eq!(s.kurtosis(), 0.0);
            assert_eq!(s.coefficient_of_variation(), 0.0);
        }
    }

    mod shape {
        use super::*;

        #[test]
        fn test_skewness_known_value() {
            // mean 3, sigma^2 = 22/5, sum((x - mean)^3) = 54
            let s = sample(&[1.0, 2.0, 2.0, 3.0, 7.0]);
            let sigma = (22.0_f64 / 5.0).sqrt();
            let expected = 5.0 / (4.0 * 3.0) * (54.0 / sigma.powi(3));
            assert_close(s.skewness(), expected);
        }

        #[test]
        fn test_skewness_sign_follows_tail() {
            assert!(sample(&[1.0, 1.0, 2.0, 2.0, 10.0]).skewness() > 0.0);
            assert!(sample(&[-10.0, 1.0, 1.0, 2.0, 2.0]).skewness() < 0.0);
        }

        #[test]
        fn test_coefficient_of_variation() {
            let s = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
            assert_close(s.coefficient_of_variation(), 2.5_f64.sqrt() / 3.0 * 100.0);
            let negative = sample(&[-1.0, -2.0, -3.0, -4.0, -5.0]);
            assert_close(
                negative.coefficient_of_variation(),
                s.coefficient_of_variation(),
            );
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn test_percentile_extremes_match_min_max() {
            for values in random_samples().filter(|v| !v.is_empty()) {
                let s = sample(&values);
                assert_eq!(s.percentile(0.0), Ok(s.min()));
                assert_eq!(s.percentile(100.0), Ok(s.max()));
            }
        }

        #[expect(clippy::cast_precision_loss)]
        #[test]
        fn test_bessel_correction() {
            for values in random_samples().filter(|v| v.len() > 1) {
                let s = sample(&values);
                let n = values.len() as f64;
                let corrected = s.variance(Estimator::Population) * n / (n - 1.0);
                assert!((s.variance(Estimator::Sample) - corrected).abs() < 1e-6);
            }
        }

        #[test]
        fn test_q2_is_median_and_iqr_non_negative() {
            for values in random_samples() {
                let s = sample(&values);
                assert_eq!(s.quartiles().q2, s.median());
                assert!(s.interquartile_range() >= 0.0);
            }
        }

        #[test]
        fn test_median_matches_textbook_definition() {
            for values in random_samples().filter(|v| !v.is_empty()) {
                let mut sorted = values.clone();
                sorted.sort_by(f64::total_cmp);
                let n = sorted.len();
                let expected = if n % 2 == 1 {
                    sorted[n / 2]
                } else {
                    (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
                };
                assert_close(sample(&values).median(), expected);
            }
        }

        #[test]
        fn test_statistics_are_idempotent() {
            for values in random_samples() {
                let s = sample(&values);
                assert_eq!(s.summary(), s.summary());
                assert_eq!(s.percentile(33.0), s.percentile(33.0));
            }
        }

        #[test]
        fn test_outliers_lie_outside_fences() {
            for values in random_samples() {
                let outliers = sample(&values).outliers();
                assert!(outliers.lower.iter().all(|&v| v < outliers.lower_fence));
                assert!(outliers.upper.iter().all(|&v| v > outliers.upper_fence));
            }
        }
    }

    #[test]
    fn test_summary_assembles_statistics() {
        let s = sample(&[4.0, 8.0, 15.0, 16.0, 23.0, 42.0]);
        let summary = s.summary();
        assert_eq!(summary.name, "test");
        assert_eq!(summary.count, 6);
        assert_eq!(summary.mean, s.mean());
        assert_eq!(summary.quartiles, s.quartiles());
        assert_eq!(summary.interquartile_range, s.interquartile_range());
        assert_eq!(summary.min, 4.0);
        assert_eq!(summary.max, 42.0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["quartiles"]["q2"], 15.5);
    }
}

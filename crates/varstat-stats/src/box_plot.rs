use serde::Serialize;

use crate::numeric::{self, Quartiles};

/// Geometry of a Tukey box plot.
///
/// The box spans `q1..q3` with a line at the median. Whiskers reach the most
/// extreme observations still inside the Tukey fences; everything beyond is a
/// flier.
///
/// # Examples
///
/// ```
/// use varstat_stats::box_plot::BoxPlot;
///
/// let plot = BoxPlot::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0, 40.0]).unwrap();
/// assert_eq!(plot.upper_whisker, 5.0);
/// assert_eq!(plot.fliers, vec![40.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Observations outside the fences, ascending.
    pub fliers: Vec<f64>,
}

impl BoxPlot {
    /// Computes box-plot geometry from sorted values.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let quartiles @ Quartiles { q1, q2, q3 } = numeric::quartiles_of_sorted(sorted_values);
        let (lower_fence, upper_fence) = numeric::tukey_fences(&quartiles);

        let lower_whisker = sorted_values
            .iter()
            .copied()
            .find(|&value| value >= lower_fence)?;
        let upper_whisker = sorted_values
            .iter()
            .copied()
            .rfind(|&value| value <= upper_fence)?;
        let fliers = sorted_values
            .iter()
            .copied()
            .filter(|&value| value < lower_fence || value > upper_fence)
            .collect();

        Some(Self {
            q1,
            median: q2,
            q3,
            lower_whisker,
            upper_whisker,
            fliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fliers_whiskers_reach_extremes() {
        let plot = BoxPlot::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(plot.q1, 2.0);
        assert_eq!(plot.median, 3.0);
        assert_eq!(plot.q3, 4.0);
        assert_eq!(plot.lower_whisker, 1.0);
        assert_eq!(plot.upper_whisker, 5.0);
        assert!(plot.fliers.is_empty());
    }

    #[test]
    fn test_fliers_on_both_sides() {
        let values = [-30.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 60.0];
        let plot = BoxPlot::from_sorted(&values).unwrap();
        assert_eq!(plot.fliers, vec![-30.0, 60.0]);
        assert_eq!(plot.lower_whisker, 10.0);
        assert_eq!(plot.upper_whisker, 17.0);
    }

    #[test]
    fn test_single_value() {
        let plot = BoxPlot::from_sorted(&[4.0]).unwrap();
        assert_eq!(plot.lower_whisker, 4.0);
        assert_eq!(plot.upper_whisker, 4.0);
        assert!(plot.fliers.is_empty());
    }

    #[test]
    fn test_empty() {
        assert_eq!(BoxPlot::from_sorted(&[]), None);
    }
}

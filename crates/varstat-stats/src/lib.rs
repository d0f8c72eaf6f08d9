//! Descriptive statistics for a single named variable.
//!
//! This crate classifies one column of raw observations as either quantitative
//! (numeric) or qualitative (categorical) and exposes the analyses that make
//! sense for each kind:
//!
//! - **Numeric samples**: central tendency, dispersion, shape, quartiles and
//!   Tukey-fence outlier detection
//! - **Percentiles**: linearly interpolated percentiles over sorted data
//! - **Categorical samples**: frequency tables, cumulative frequencies and modes
//! - **Chart data**: histogram bins and box-plot geometry for numeric samples
//!
//! The crate only produces data. Formatting, tables and graphics belong to the
//! caller.
//!
//! # Modules
//!
//! - [`raw`]: Raw input cells and named columns
//! - [`variable`]: One-shot classification into a numeric or categorical variable
//! - [`numeric`]: The quantitative statistics engine
//! - [`percentiles`]: Percentile computation and storage
//! - [`categorical`]: Frequency tables for qualitative data
//! - [`histogram`]: Histogram construction for numeric data
//! - [`box_plot`]: Box-plot geometry for numeric data
//!
//! # Examples
//!
//! ## Computing numeric statistics
//!
//! ```
//! use varstat_stats::numeric::NumericSample;
//!
//! let sample = NumericSample::from_f64s([1.0, 2.0, 3.0, 4.0, 5.0], Some("score"));
//! assert_eq!(sample.mean(), 3.0);
//! assert_eq!(sample.median(), 3.0);
//! assert_eq!(sample.percentile(25.0).unwrap(), 2.0);
//! ```
//!
//! ## Classifying a raw column
//!
//! ```
//! use varstat_stats::{
//!     raw::RawColumn,
//!     variable::{Variable, VariableKind},
//! };
//!
//! let column = RawColumn::parse_cells(Some("color".to_owned()), ["red", "blue", "", "red"]);
//! let variable = Variable::classify(column, None);
//! assert_eq!(variable.kind(), VariableKind::Qualitative);
//! assert_eq!(variable.count(), 3);
//! ```
//!
//! ## Building a frequency table
//!
//! ```
//! use varstat_stats::categorical::CategoricalSample;
//!
//! let sample = CategoricalSample::from_labels(["a", "b", "a"], None);
//! let table = sample.frequency_table();
//! assert_eq!(table[0].category, "a");
//! assert_eq!(table[0].absolute, 2);
//! ```

pub mod box_plot;
pub mod categorical;
pub mod histogram;
pub mod numeric;
pub mod percentiles;
pub mod raw;
pub mod variable;

/// Display name used when neither the caller nor the input supplies one.
pub const DEFAULT_NAME: &str = "Unnamed";

/// Picks the display name of a variable.
///
/// An explicit name wins over the name carried by the input; blank names are
/// treated as absent.
pub(crate) fn resolve_name(explicit: Option<&str>, carried: Option<&str>) -> String {
    explicit
        .filter(|name| !name.trim().is_empty())
        .or(carried.filter(|name| !name.trim().is_empty()))
        .unwrap_or(DEFAULT_NAME)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_name_takes_priority() {
        assert_eq!(resolve_name(Some("income"), Some("col_3")), "income");
    }

    #[test]
    fn test_carried_name_used_when_no_explicit_name() {
        assert_eq!(resolve_name(None, Some("col_3")), "col_3");
    }

    #[test]
    fn test_placeholder_when_no_name() {
        assert_eq!(resolve_name(None, None), DEFAULT_NAME);
        assert_eq!(resolve_name(Some("  "), Some("")), DEFAULT_NAME);
    }
}

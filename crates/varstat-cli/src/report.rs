//! Plain-text rendering of summaries and frequency tables.

use std::fmt;

use varstat_stats::{
    categorical::{CategoricalSummary, CumulativeFrequencyRow, FrequencyRow},
    numeric::NumericSummary,
    percentiles::Percentiles,
    variable::VariableSummary,
};

const RULE_WIDTH: usize = 54;

/// Text report for any variable summary.
pub(crate) struct SummaryReport<'a> {
    pub summary: &'a VariableSummary,
    pub percentiles: Option<&'a Percentiles>,
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.summary {
            VariableSummary::Quantitative(summary) => {
                fmt::Display::fmt(&NumericReport::new(summary, self.percentiles), f)
            }
            VariableSummary::Qualitative(summary) => {
                fmt::Display::fmt(&CategoricalReport(summary), f)
            }
        }
    }
}

struct NumericReport<'a> {
    summary: &'a NumericSummary,
    percentiles: Option<&'a Percentiles>,
}

impl<'a> NumericReport<'a> {
    fn new(summary: &'a NumericSummary, percentiles: Option<&'a Percentiles>) -> Self {
        Self {
            summary,
            percentiles,
        }
    }
}

fn rule(f: &mut fmt::Formatter<'_>, ch: char) -> fmt::Result {
    writeln!(f, "{}", ch.to_string().repeat(RULE_WIDTH))
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: f64) -> fmt::Result {
    writeln!(f, "{:<26}{value:.4}", format!("{label}:"))
}

impl fmt::Display for NumericReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "========== Statistical summary: {} ==========", s.name)?;
        writeln!(f, "{:<26}{}", "Valid records:", s.count)?;
        rule(f, '-')?;
        line(f, "Mean", s.mean)?;
        line(f, "Median (Q2)", s.median)?;
        rule(f, '-')?;
        line(f, "Standard deviation", s.std_dev)?;
        line(f, "Variance", s.variance)?;
        line(f, "Range", s.range)?;
        line(f, "Interquartile range", s.interquartile_range)?;
        if s.coefficient_of_variation.is_finite() {
            writeln!(
                f,
                "{:<26}{:.4}%",
                "Coefficient of variation:", s.coefficient_of_variation
            )?;
        } else {
            writeln!(f, "{:<26}undefined (mean is 0)", "Coefficient of variation:")?;
        }
        rule(f, '-')?;
        line(f, "Skewness", s.skewness)?;
        line(f, "Kurtosis", s.kurtosis)?;
        rule(f, '-')?;
        line(f, "Minimum", s.min)?;
        line(f, "Quartile 1 (Q1 - 25%)", s.quartiles.q1)?;
        line(f, "Quartile 3 (Q3 - 75%)", s.quartiles.q3)?;
        line(f, "Maximum", s.max)?;
        if let Some(percentiles) = self.percentiles {
            rule(f, '-')?;
            for point in percentiles.iter() {
                line(f, &format!("Percentile {}", point.percentile), point.value)?;
            }
        }
        rule(f, '-')?;

        let outliers = &s.outliers;
        if outliers.is_empty() {
            writeln!(f, "{:<26}not detected", "Outliers:")?;
        } else {
            writeln!(f, "{:<26}detected", "Outliers:")?;
            if !outliers.lower.is_empty() {
                writeln!(f, "  - Lower: {:?}", outliers.lower)?;
            }
            if !outliers.upper.is_empty() {
                writeln!(f, "  - Upper: {:?}", outliers.upper)?;
            }
        }
        rule(f, '=')
    }
}

struct CategoricalReport<'a>(&'a CategoricalSummary);

impl fmt::Display for CategoricalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "========== Variable summary: {} ==========", s.name)?;
        writeln!(f, "{:<26}{}", "Observations:", s.count)?;
        writeln!(f, "{:<26}{}", "Categories:", s.category_count)?;
        if let Some(mode) = &s.mode {
            writeln!(
                f,
                "{:<26}{} ({} times)",
                "Most frequent category:", mode.category, mode.count
            )?;
        }
        if let Some(least) = &s.least_frequent {
            writeln!(
                f,
                "{:<26}{} ({} times)",
                "Least frequent category:", least.category, least.count
            )?;
        }
        rule(f, '-')?;
        writeln!(f, "Frequency table:")?;
        fmt::Display::fmt(&CumulativeTable(&s.frequency_table), f)?;
        rule(f, '=')
    }
}

fn category_width<'a>(categories: impl Iterator<Item = &'a str>) -> usize {
    categories
        .map(|category| category.chars().count())
        .chain([8])
        .max()
        .unwrap_or_default()
}

/// Absolute and relative frequencies, one category per line.
pub(crate) struct FrequencyTable<'a>(pub &'a [FrequencyRow]);

impl fmt::Display for FrequencyTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = category_width(self.0.iter().map(|row| row.category.as_str()));
        writeln!(f, "  {:<width$} {:>10} {:>10}", "Category", "Absolute", "Relative")?;
        for row in self.0 {
            writeln!(
                f,
                "  {:<width$} {:>10} {:>10.3}",
                row.category, row.absolute, row.relative
            )?;
        }
        Ok(())
    }
}

/// Frequencies with running totals, one category per line.
pub(crate) struct CumulativeTable<'a>(pub &'a [CumulativeFrequencyRow]);

impl fmt::Display for CumulativeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = category_width(self.0.iter().map(|row| row.category.as_str()));
        writeln!(
            f,
            "  {:<width$} {:>10} {:>10} {:>12} {:>12}",
            "Category", "Absolute", "Relative", "Cum. abs.", "Cum. rel."
        )?;
        for row in self.0 {
            writeln!(
                f,
                "  {:<width$} {:>10} {:>10.3} {:>12} {:>12.3}",
                row.category,
                row.absolute,
                row.relative,
                row.cumulative_absolute,
                row.cumulative_relative
            )?;
        }
        Ok(())
    }
}

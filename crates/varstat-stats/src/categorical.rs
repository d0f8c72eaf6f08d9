use std::collections::HashMap;

use serde::Serialize;

use crate::raw::{RawColumn, RawValue};

/// Decimal places kept for relative frequencies.
const RELATIVE_DECIMALS: i32 = 3;
/// Decimal places kept for category percentages.
const PERCENT_DECIMALS: i32 = 2;

/// A cleaned, immutable sequence of category labels with a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalSample {
    name: String,
    values: Vec<String>,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub category: String,
    /// Number of observations in this category.
    pub absolute: usize,
    /// `absolute / n`, rounded to three decimals.
    pub relative: f64,
}

/// A frequency table row extended with running totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeFrequencyRow {
    pub category: String,
    pub absolute: usize,
    pub relative: f64,
    pub cumulative_absolute: usize,
    pub cumulative_relative: f64,
}

/// A category together with how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Everything a report needs to describe a categorical variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    pub name: String,
    pub count: usize,
    pub category_count: usize,
    pub mode: Option<CategoryCount>,
    pub least_frequent: Option<CategoryCount>,
    pub frequency_table: Vec<CumulativeFrequencyRow>,
}

impl CategoricalSample {
    /// Builds a sample from raw observations, dropping missing ones.
    ///
    /// Numbers become labels through their `Display` form, so `3.0` is
    /// counted as the category `"3"`.
    #[must_use]
    pub fn new<I>(values: I, name: Option<&str>) -> Self
    where
        I: IntoIterator<Item = RawValue>,
    {
        Self::from_column(values.into_iter().collect(), name)
    }

    /// Builds a sample from a raw column, falling back to the column's own
    /// name when `name` is `None`.
    #[must_use]
    pub fn from_column(column: RawColumn, name: Option<&str>) -> Self {
        let name = crate::resolve_name(name, column.name.as_deref());
        let total = column.values.len();
        let values = column
            .values
            .into_iter()
            .filter_map(|value| match value {
                RawValue::Missing => None,
                RawValue::Number(number) if number.is_nan() => None,
                RawValue::Number(number) => Some(number.to_string()),
                RawValue::Text(text) => Some(text),
            })
            .collect::<Vec<_>>();
        if values.len() < total {
            tracing::debug!(
                variable = %name,
                dropped = total - values.len(),
                "dropped missing observations"
            );
        }
        Self { name, values }
    }

    /// Builds a sample from labels that are all present.
    ///
    /// # Examples
    ///
    /// ```
    /// use varstat_stats::categorical::CategoricalSample;
    ///
    /// let sample = CategoricalSample::from_labels(["Single", "Married", "Single"], Some("status"));
    /// assert_eq!(sample.count(), 3);
    /// assert_eq!(sample.category_count(), 2);
    /// ```
    #[must_use]
    pub fn from_labels<I, S>(labels: I, name: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: crate::resolve_name(name, None),
            values: labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
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

    /// Distinct categories with their counts, in order of first appearance.
    fn counts(&self) -> Vec<(&str, usize)> {
        let mut index = HashMap::<&str, usize>::new();
        let mut counts = Vec::<(&str, usize)>::new();
        for value in &self.values {
            let idx = *index.entry(value.as_str()).or_insert_with(|| {
                counts.push((value.as_str(), 0));
                counts.len() - 1
            });
            counts[idx].1 += 1;
        }
        counts
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.counts().len()
    }

    /// Absolute and relative frequency of every category, most frequent first.
    ///
    /// Categories with equal counts keep their order of first appearance.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn frequency_table(&self) -> Vec<FrequencyRow> {
        let n = self.values.len() as f64;
        let mut counts = self.counts();
        counts.sort_by(|(_, a), (_, b)| b.cmp(a));
        counts
            .into_iter()
            .map(|(category, absolute)| FrequencyRow {
                category: category.to_owned(),
                absolute,
                relative: round_to(absolute as f64 / n, RELATIVE_DECIMALS),
            })
            .collect()
    }

    /// The frequency table sorted by category label.
    #[must_use]
    pub fn alphabetical_frequency_table(&self) -> Vec<FrequencyRow> {
        let mut table = self.frequency_table();
        table.sort_by(|a, b| a.category.cmp(&b.category));
        table
    }

    /// The frequency table with running totals.
    ///
    /// The cumulative relative frequency sums the rounded relative
    /// frequencies, so the last row may differ from `1.0` by rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// use varstat_stats::categorical::CategoricalSample;
    ///
    /// let sample = CategoricalSample::from_labels(["x", "y", "x", "z"], None);
    /// let table = sample.cumulative_frequency_table();
    /// assert_eq!(table.last().unwrap().cumulative_absolute, 4);
    /// assert_eq!(table.last().unwrap().cumulative_relative, 1.0);
    /// ```
    #[must_use]
    pub fn cumulative_frequency_table(&self) -> Vec<CumulativeFrequencyRow> {
        accumulate(self.frequency_table())
    }

    /// The most frequent category, or `None` for an empty sample.
    #[must_use]
    pub fn mode(&self) -> Option<CategoryCount> {
        self.frequency_table()
            .into_iter()
            .next()
            .map(CategoryCount::from)
    }

    /// The least frequent category, or `None` for an empty sample.
    ///
    /// Among tied categories the one appearing first in the frequency table
    /// wins.
    #[must_use]
    pub fn least_frequent(&self) -> Option<CategoryCount> {
        let table = self.frequency_table();
        let min = table.iter().map(|row| row.absolute).min()?;
        table
            .into_iter()
            .find(|row| row.absolute == min)
            .map(CategoryCount::from)
    }

    /// Share of observations in `category`, in percent with two decimals.
    ///
    /// Returns `None` if the category does not occur.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn category_percentage(&self, category: &str) -> Option<f64> {
        let count = self.values.iter().filter(|value| *value == category).count();
        if count == 0 {
            return None;
        }
        let share = count as f64 / self.values.len() as f64 * 100.0;
        Some(round_to(share, PERCENT_DECIMALS))
    }

    #[must_use]
    pub fn summary(&self) -> CategoricalSummary {
        CategoricalSummary {
            name: self.name.clone(),
            count: self.count(),
            category_count: self.category_count(),
            mode: self.mode(),
            least_frequent: self.least_frequent(),
            frequency_table: self.cumulative_frequency_table(),
        }
    }
}

impl From<FrequencyRow> for CategoryCount {
    fn from(row: FrequencyRow) -> Self {
        Self {
            category: row.category,
            count: row.absolute,
        }
    }
}

/// Adds running totals to frequency rows, in the order given.
///
/// The cumulative relative frequency sums the rounded relative frequencies
/// and is rounded again to three decimals.
#[must_use]
pub fn accumulate(rows: Vec<FrequencyRow>) -> Vec<CumulativeFrequencyRow> {
    let mut cumulative_absolute = 0;
    let mut cumulative_relative = 0.0;
    rows.into_iter()
        .map(|row| {
            cumulative_absolute += row.absolute;
            cumulative_relative += row.relative;
            CumulativeFrequencyRow {
                category: row.category,
                absolute: row.absolute,
                relative: row.relative,
                cumulative_absolute,
                cumulative_relative: round_to(cumulative_relative, RELATIVE_DECIMALS),
            }
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

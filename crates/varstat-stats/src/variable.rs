use serde::Serialize;

use crate::{
    categorical::{CategoricalSample, CategoricalSummary},
    numeric::{self, NumericSample, NumericSummary},
    raw::{RawColumn, RawValue},
};

/// The kind of a variable, decided once when it is classified.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Numeric observations.
    #[display("quantitative")]
    Quantitative,
    /// Category labels.
    #[display("qualitative")]
    Qualitative,
}

impl VariableKind {
    /// Detects the kind of a sequence of raw values.
    ///
    /// Missing values are ignored. The values are quantitative when every
    /// remaining one is, or parses as, a number; this includes an empty
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use varstat_stats::{raw::RawValue, variable::VariableKind};
    ///
    /// let values = [RawValue::from("12"), RawValue::Missing, RawValue::from(4.5)];
    /// assert_eq!(VariableKind::detect(&values), VariableKind::Quantitative);
    ///
    /// let values = [RawValue::from("12"), RawValue::from("n/a yet")];
    /// assert_eq!(VariableKind::detect(&values), VariableKind::Qualitative);
    /// ```
    #[must_use]
    pub fn detect(values: &[RawValue]) -> Self {
        if numeric::coerce_numeric(values).is_ok() {
            Self::Quantitative
        } else {
            Self::Qualitative
        }
    }
}

/// A classified variable.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum Variable {
    Numeric(NumericSample),
    Categorical(CategoricalSample),
}

/// Summary of either kind of variable, tagged with its kind when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariableSummary {
    Quantitative(NumericSummary),
    Qualitative(CategoricalSummary),
}

impl Variable {
    /// Classifies a raw column and builds the matching sample.
    ///
    /// The name is resolved as for the sample constructors: `name` first, then
    /// the column's own name, then [`DEFAULT_NAME`](crate::DEFAULT_NAME).
    #[must_use]
    pub fn classify(column: RawColumn, name: Option<&str>) -> Self {
        let resolved = crate::resolve_name(name, column.name.as_deref());
        let numbers = numeric::coerce_numeric(&column.values).ok();
        let variable = match numbers {
            Some(values) => Self::Numeric(NumericSample::from_parts(resolved, values)),
            None => Self::Categorical(CategoricalSample::from_column(column, Some(&resolved))),
        };
        tracing::debug!(
            variable = variable.name(),
            kind = %variable.kind(),
            count = variable.count(),
            "classified variable"
        );
        variable
    }

    #[must_use]
    pub fn kind(&self) -> VariableKind {
        match self {
            Self::Numeric(_) => VariableKind::Quantitative,
            Self::Categorical(_) => VariableKind::Qualitative,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(sample) => sample.name(),
            Self::Categorical(sample) => sample.name(),
        }
    }

    /// Number of non-missing observations.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Numeric(sample) => sample.count(),
            Self::Categorical(sample) => sample.count(),
        }
    }

    #[must_use]
    pub fn as_numeric(&self) -> Option<&NumericSample> {
        match self {
            Self::Numeric(sample) => Some(sample),
            Self::Categorical(_) => None,
        }
    }

    #[must_use]
    pub fn as_categorical(&self) -> Option<&CategoricalSample> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(sample) => Some(sample),
        }
    }

    #[must_use]
    pub fn summary(&self) -> VariableSummary {
        match self {
            Self::Numeric(sample) => VariableSummary::Quantitative(sample.summary()),
            Self::Categorical(sample) => VariableSummary::Qualitative(sample.summary()),
        }
    }
}

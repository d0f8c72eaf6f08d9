use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use varstat_stats::{
    percentiles::Percentiles,
    variable::{VariableKind, VariableSummary},
};

/// Envelope written around every JSON report.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Report<T> {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Data file the column was read from
    pub source: PathBuf,
    /// Header of the analyzed column
    pub column: String,
    pub data: T,
}

impl<T> Report<T> {
    pub(crate) fn new(source: &Path, column: &str, data: T) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.to_owned(),
            column: column.to_owned(),
            data,
        }
    }
}

/// Payload of `describe --format json`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DescribeData {
    pub summary: VariableSummary,
    /// Extra percentiles requested on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentiles: Option<Percentiles>,
}

/// One line of the `columns` listing.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ColumnInfo {
    pub name: String,
    pub kind: VariableKind,
    /// Non-missing cells
    pub count: usize,
    pub missing: usize,
}

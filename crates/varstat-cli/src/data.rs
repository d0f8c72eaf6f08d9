use std::{fs::File, io, path::Path};

use anyhow::Context;
use varstat_stats::raw::RawColumn;

/// A delimited text file held in memory column by column.
///
/// Cells stay as text; they are parsed into raw values only when a column is
/// requested.
#[derive(Debug, Clone)]
pub(crate) struct DataTable {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
    row_count: usize,
}

impl DataTable {
    pub(crate) fn load(path: &Path, delimiter: u8) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open data file: {}", path.display()))?;
        let table = Self::from_reader(io::BufReader::new(file), delimiter)
            .with_context(|| format!("Failed to parse data file: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            rows = table.row_count,
            columns = table.headers.len(),
            "loaded data file"
        );
        Ok(table)
    }

    /// Reads a header row followed by records.
    ///
    /// Short records are padded with empty (missing) cells and surplus cells
    /// are ignored.
    pub(crate) fn from_reader<R>(reader: R, delimiter: u8) -> anyhow::Result<Self>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()
            .context("Failed to read header row")?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        if headers.is_empty() {
            anyhow::bail!("Header row is empty");
        }

        let mut columns = vec![Vec::new(); headers.len()];
        let mut row_count = 0;
        for record in reader.records() {
            let record =
                record.with_context(|| format!("Failed to read record {}", row_count + 1))?;
            for (idx, column) in columns.iter_mut().enumerate() {
                column.push(record.get(idx).unwrap_or_default().to_owned());
            }
            row_count += 1;
        }

        Ok(Self {
            headers,
            columns,
            row_count,
        })
    }

    /// Returns the named column as raw values, labelled with its header.
    pub(crate) fn column(&self, name: &str) -> anyhow::Result<RawColumn> {
        let idx = self
            .headers
            .iter()
            .position(|header| header == name)
            .with_context(|| {
                format!(
                    "Column '{name}' not found; available columns: {}",
                    self.headers.join(", ")
                )
            })?;
        Ok(self.raw_column(idx))
    }

    /// Every column as raw values, in header order.
    pub(crate) fn columns(&self) -> impl Iterator<Item = RawColumn> + '_ {
        (0..self.headers.len()).map(|idx| self.raw_column(idx))
    }

    fn raw_column(&self, idx: usize) -> RawColumn {
        RawColumn::parse_cells(Some(self.headers[idx].clone()), &self.columns[idx])
    }
}

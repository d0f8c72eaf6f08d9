use std::path::PathBuf;

use anyhow::Context;
use varstat_stats::categorical::{self, CategoricalSample, CumulativeFrequencyRow, FrequencyRow};

use crate::{
    report::{CumulativeTable, FrequencyTable},
    util::Output,
};

use super::ColumnArg;

/// Row order of a frequency table.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum TableOrder {
    /// Most frequent category first
    #[default]
    Frequency,
    /// Categories sorted by name
    Alphabetical,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FrequenciesArg {
    #[clap(flatten)]
    column: ColumnArg,
    /// Row order (frequency or alphabetical)
    #[arg(long, default_value = "frequency")]
    order: TableOrder,
    /// Include cumulative absolute and relative frequencies
    #[arg(long)]
    cumulative: bool,
    /// Also print the percentage of this category
    #[arg(long)]
    category: Option<String>,
    /// Write the table as CSV to this path instead of printing it
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &FrequenciesArg) -> anyhow::Result<()> {
    let variable = arg.column.load_variable()?;
    let Some(sample) = variable.as_categorical() else {
        anyhow::bail!(
            "Column '{}' is quantitative; frequency tables need a qualitative column",
            arg.column.column
        );
    };

    let table = Table::build(sample, arg.order, arg.cumulative);
    match &arg.output {
        Some(path) => {
            let mut output = Output::open(path.clone())?;
            table.write_csv(&mut output)?;
            output.finish()?;
        }
        None => {
            let mut output = Output::stdout();
            output.write_text(&table.to_string())?;
        }
    }

    if let Some(category) = &arg.category {
        match sample.category_percentage(category) {
            Some(percentage) => {
                Output::stdout().write_text(&category_percentage_line(category, percentage))?;
            }
            None => tracing::warn!(category, "category does not occur in the column"),
        }
    }
    Ok(())
}

fn category_percentage_line(category: &str, percentage: f64) -> String {
    format!("{category}: {percentage:.2}%\n")
}

#[derive(Debug, Clone, PartialEq)]
enum Table {
    Plain(Vec<FrequencyRow>),
    Cumulative(Vec<CumulativeFrequencyRow>),
}

impl Table {
    fn build(sample: &CategoricalSample, order: TableOrder, cumulative: bool) -> Self {
        let rows = match order {
            TableOrder::Frequency => sample.frequency_table(),
            TableOrder::Alphabetical => sample.alphabetical_frequency_table(),
        };
        if cumulative {
            Self::Cumulative(categorical::accumulate(rows))
        } else {
            Self::Plain(rows)
        }
    }

    fn write_csv<W>(&self, writer: W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        match self {
            Self::Plain(rows) => {
                for row in rows {
                    writer.serialize(row).context("Failed to write CSV row")?;
                }
            }
            Self::Cumulative(rows) => {
                for row in rows {
                    writer.serialize(row).context("Failed to write CSV row")?;
                }
            }
        }
        writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(rows) => std::fmt::Display::fmt(&FrequencyTable(rows), f),
            Self::Cumulative(rows) => std::fmt::Display::fmt(&CumulativeTable(rows), f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoricalSample {
        CategoricalSample::from_labels(
            ["Single", "Married", "Single", "Divorced", "Single", "Married"],
            Some("Marital_Status"),
        )
    }

    #[test]
    fn test_frequency_order_cumulative_matches_sample() {
        let sample = sample();
        let table = Table::build(&sample, TableOrder::Frequency, true);
        assert_eq!(
            table,
            Table::Cumulative(sample.cumulative_frequency_table())
        );
    }

    #[test]
    fn test_alphabetical_cumulative() {
        let Table::Cumulative(rows) = Table::build(&sample(), TableOrder::Alphabetical, true)
        else {
            panic!("expected cumulative table");
        };
        let categories = rows.iter().map(|row| row.category.as_str()).collect::<Vec<_>>();
        assert_eq!(categories, ["Divorced", "Married", "Single"]);
        let totals = rows
            .iter()
            .map(|row| row.cumulative_absolute)
            .collect::<Vec<_>>();
        assert_eq!(totals, [1, 3, 6]);
        assert!((rows[2].cumulative_relative - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_write_csv() {
        let table = Table::build(&sample(), TableOrder::Frequency, false);
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "category,absolute,relative\nSingle,3,0.5\nMarried,2,0.333\nDivorced,1,0.167\n"
        );
    }

    #[test]
    fn test_category_percentage_line() {
        let percentage = sample().category_percentage("Married").unwrap();
        assert_eq!(
            category_percentage_line("Married", percentage),
            "Married: 33.33%\n"
        );
    }

    #[test]
    fn test_table_order_parses_case_insensitively() {
        assert_eq!("Alphabetical".parse::<TableOrder>().unwrap(), TableOrder::Alphabetical);
        assert!("size".parse::<TableOrder>().is_err());
    }
}

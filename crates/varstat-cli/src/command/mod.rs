use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use varstat_stats::variable::Variable;

use crate::data::DataTable;

use self::{
    chart::{BoxPlotArg, HistogramArg},
    columns::ColumnsArg,
    describe::DescribeArg,
    frequencies::FrequenciesArg,
};

mod chart;
mod columns;
mod describe;
mod frequencies;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: debug, -vv: trace). `RUST_LOG` takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// What to do with the data file
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List the columns of a data file with their detected kind
    Columns(#[clap(flatten)] ColumnsArg),
    /// Print the statistical summary of one column
    Describe(#[clap(flatten)] DescribeArg),
    /// Print or export the frequency table of a qualitative column
    Frequencies(#[clap(flatten)] FrequenciesArg),
    /// Write histogram data for a quantitative column
    Histogram(#[clap(flatten)] HistogramArg),
    /// Write box-plot data for a quantitative column
    BoxPlot(#[clap(flatten)] BoxPlotArg),
}

/// Output format of reports written by the subcommands.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Location and layout of the data file.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DataArg {
    /// Path to the CSV data file
    pub input: PathBuf,
    /// Field delimiter used by the data file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

impl DataArg {
    pub(crate) fn load(&self) -> anyhow::Result<DataTable> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Delimiter must be an ASCII character: {:?}", self.delimiter))?;
        DataTable::load(&self.input, delimiter)
    }
}

/// A single column of the data file.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ColumnArg {
    #[clap(flatten)]
    pub data: DataArg,
    /// Header of the column to analyze
    #[arg(long, short)]
    pub column: String,
    /// Display name to use instead of the column header
    #[arg(long)]
    pub name: Option<String>,
}

impl ColumnArg {
    pub(crate) fn load_variable(&self) -> anyhow::Result<Variable> {
        let table = self.data.load()?;
        let column = table.column(&self.column)?;
        let variable = Variable::classify(column, self.name.as_deref());
        tracing::info!(
            column = %self.column,
            kind = %variable.kind(),
            count = variable.count(),
            "classified column"
        );
        Ok(variable)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Columns(arg) => columns::run(&arg)?,
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Frequencies(arg) => frequencies::run(&arg)?,
        Mode::Histogram(arg) => chart::run_histogram(&arg)?,
        Mode::BoxPlot(arg) => chart::run_box_plot(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_describe() {
        let args = CommandArgs::try_parse_from([
            "varstat",
            "describe",
            "data.csv",
            "--column",
            "Monthly_Income",
            "--format",
            "json",
            "--percentiles",
            "10,90",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.verbose, 1);
        let Mode::Describe(arg) = args.mode else {
            panic!("expected describe subcommand");
        };
        assert_eq!(arg.column.column, "Monthly_Income");
        assert_eq!(arg.column.data.delimiter, ',');
        assert_eq!(arg.format, OutputFormat::Json);
        assert_eq!(arg.percentiles, vec![10.0, 90.0]);
    }

    #[test]
    fn test_parse_histogram_bins() {
        let args =
            CommandArgs::try_parse_from(["varstat", "histogram", "d.csv", "-c", "x", "--bins", "12"])
                .unwrap();
        let Mode::Histogram(arg) = args.mode else {
            panic!("expected histogram subcommand");
        };
        assert_eq!(arg.bins, varstat_stats::histogram::BinCount::Fixed(12));
    }

    #[test]
    fn test_box_plot_subcommand_name() {
        let args = CommandArgs::try_parse_from(["varstat", "box-plot", "d.csv", "-c", "x"]).unwrap();
        assert!(matches!(args.mode, Mode::BoxPlot(_)));
    }
}

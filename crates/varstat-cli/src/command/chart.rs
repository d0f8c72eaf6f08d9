use std::path::PathBuf;

use varstat_stats::{histogram::BinCount, numeric::NumericSample, variable::Variable};

use crate::{schema::Report, util::Output};

use super::ColumnArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HistogramArg {
    #[clap(flatten)]
    pub column: ColumnArg,
    /// Number of bins, or "auto" to derive it from the data
    #[arg(long, default_value = "auto")]
    pub bins: BinCount,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BoxPlotArg {
    #[clap(flatten)]
    pub column: ColumnArg,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn load_numeric(column: &ColumnArg) -> anyhow::Result<NumericSample> {
    match column.load_variable()? {
        Variable::Numeric(sample) => Ok(sample),
        Variable::Categorical(_) => anyhow::bail!(
            "Column '{}' is qualitative; charts need a quantitative column",
            column.column
        ),
    }
}

pub(crate) fn run_histogram(arg: &HistogramArg) -> anyhow::Result<()> {
    let sample = load_numeric(&arg.column)?;
    let histogram = sample.histogram(arg.bins);
    tracing::debug!(bins = histogram.bins.len(), "built histogram");

    let report = Report::new(&arg.column.data.input, &arg.column.column, histogram);
    Output::from_output_path(arg.output.clone())?.write_json(&report)
}

pub(crate) fn run_box_plot(arg: &BoxPlotArg) -> anyhow::Result<()> {
    let sample = load_numeric(&arg.column)?;
    let Some(box_plot) = sample.box_plot() else {
        anyhow::bail!("Column '{}' has no valid values", arg.column.column);
    };

    let report = Report::new(&arg.column.data.input, &arg.column.column, box_plot);
    Output::from_output_path(arg.output.clone())?.write_json(&report)
}

use std::path::PathBuf;

use varstat_stats::variable::Variable;

use crate::{
    report::SummaryReport,
    schema::{DescribeData, Report},
    util::Output,
};

use super::{ColumnArg, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    pub column: ColumnArg,
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    /// Additional percentiles to report, comma separated (quantitative columns only)
    #[arg(long, value_delimiter = ',')]
    pub percentiles: Vec<f64>,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let variable = arg.column.load_variable()?;

    let percentiles = match (&variable, arg.percentiles.is_empty()) {
        (_, true) => None,
        (Variable::Numeric(sample), false) => Some(sample.percentiles(&arg.percentiles)?),
        (Variable::Categorical(_), false) => {
            tracing::warn!(
                column = %arg.column.column,
                "percentiles are ignored for qualitative columns"
            );
            None
        }
    };
    let summary = variable.summary();

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        OutputFormat::Text => {
            let report = SummaryReport {
                summary: &summary,
                percentiles: percentiles.as_ref(),
            };
            output.write_text(&report.to_string())
        }
        OutputFormat::Json => {
            let report = Report::new(
                &arg.column.data.input,
                &arg.column.column,
                DescribeData {
                    summary,
                    percentiles,
                },
            );
            output.write_json(&report)
        }
    }
}

use std::fmt::{self, Write as _};

use varstat_stats::variable::VariableKind;

use crate::{schema::ColumnInfo, util::Output};

use super::{DataArg, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ColumnsArg {
    #[clap(flatten)]
    data: DataArg,
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

pub(crate) fn run(arg: &ColumnsArg) -> anyhow::Result<()> {
    let table = arg.data.load()?;
    let infos = table
        .columns()
        .map(|column| {
            let count = column.present_count();
            ColumnInfo {
                kind: VariableKind::detect(&column.values),
                missing: column.len() - count,
                count,
                name: column.name.unwrap_or_default(),
            }
        })
        .collect::<Vec<_>>();

    let mut output = Output::stdout();
    match arg.format {
        OutputFormat::Text => output.write_text(&render_columns(&infos)?),
        OutputFormat::Json => output.write_json(&infos),
    }
}

fn render_columns(infos: &[ColumnInfo]) -> Result<String, fmt::Error> {
    let width = infos
        .iter()
        .map(|info| info.name.chars().count())
        .chain([6])
        .max()
        .unwrap_or_default();
    let mut text = String::new();
    writeln!(
        text,
        "  {:<width$} {:<12} {:>8} {:>8}",
        "Column", "Kind", "Count", "Missing"
    )?;
    for info in infos {
        writeln!(
            text,
            "  {:<width$} {:<12} {:>8} {:>8}",
            info.name,
            info.kind.to_string(),
            info.count,
            info.missing
        )?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_columns() {
        let infos = [
            ColumnInfo {
                name: "Income".to_owned(),
                kind: VariableKind::Quantitative,
                count: 3,
                missing: 1,
            },
            ColumnInfo {
                name: "Status".to_owned(),
                kind: VariableKind::Qualitative,
                count: 4,
                missing: 0,
            },
        ];
        let text = render_columns(&infos).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "  Column Kind            Count  Missing");
        assert_eq!(lines[1], "  Income quantitative        3        1");
        assert_eq!(lines[2], "  Status qualitative         4        0");
    }
}

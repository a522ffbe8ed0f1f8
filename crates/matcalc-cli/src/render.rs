use std::str::FromStr;

use serde_json::json;

use matcalc_core::Matrix;

use crate::calculate::{Operation, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Render the outcome of `op` for stdout.
pub fn render(op: Operation, outcome: &Outcome, format: OutputFormat, precision: usize) -> String {
    render_named(op.name(), op.label(), outcome, format, precision)
}

/// Render an outcome under an arbitrary name and heading. Used for results
/// that do not come from an [`Operation`], such as random fill or resize.
pub fn render_named(
    name: &str,
    label: &str,
    outcome: &Outcome,
    format: OutputFormat,
    precision: usize,
) -> String {
    match format {
        OutputFormat::Text => {
            let body = match outcome {
                Outcome::Scalar(v) => format_number(*v, precision),
                Outcome::Matrix(m) => format_grid(m, precision),
            };
            format!("{}:\n{}", label, body)
        }
        OutputFormat::Json => json!({ "operation": name, "result": outcome }).to_string(),
        OutputFormat::Csv => match outcome {
            Outcome::Scalar(v) => v.to_string(),
            Outcome::Matrix(m) => m
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        },
    }
}

/// Right-aligned grid, one matrix row per line.
pub fn format_grid(m: &Matrix, precision: usize) -> String {
    let cells: Vec<Vec<String>> = m
        .rows()
        .map(|row| row.iter().map(|&v| format_number(v, precision)).collect())
        .collect();
    let width = cells
        .iter()
        .flatten()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|s| format!("{:>width$}", s, width = width))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed `precision` decimals with trailing zeros trimmed; `-0` prints as `0`.
pub fn format_number(v: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, v);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

//! Rendering of reports as text lines or JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::types::{ArithmeticReport, DigitSummary};

/// Notice printed ahead of the report when the divisor is zero.
pub const DIVISION_BY_ZERO_NOTICE: &str = "Cannot perform integer division. Division by zero.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<Label>: <value>` lines in fixed order.
    #[default]
    Text,
    /// One pretty-printed JSON object.
    Json,
}

/// Render an arithmetic report, newline-terminated.
pub fn render_report(report: &ArithmeticReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report_text(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Render a digit summary, newline-terminated.
pub fn render_digits(summary: &DigitSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(lines(&[
            ("Sum", summary.digit_sum.to_string()),
            ("Product", summary.digit_product.to_string()),
            ("Count", summary.digit_count.to_string()),
            ("Average", summary.average.to_string()),
        ])),
        OutputFormat::Json => to_json(summary),
    }
}

fn report_text(report: &ArithmeticReport) -> String {
    let mut out = String::new();
    if report.division_by_zero {
        out.push_str(DIVISION_BY_ZERO_NOTICE);
        out.push('\n');
    }
    out.push_str(&lines(&[
        ("Sum", report.sum.to_string()),
        ("Subtraction", report.difference.to_string()),
        ("Multiplication", report.product.to_string()),
        ("Integer Division", report.quotient.to_string()),
        ("Remainder", report.remainder.to_string()),
    ]));
    out
}

fn lines(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

/// Serialize `value` to pretty-printed JSON with trailing newline.
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(value).context("serialize json")?;
    payload.push('\n');
    Ok(payload)
}

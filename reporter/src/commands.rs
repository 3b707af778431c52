//! Command implementations shared by the binary and integration tests.
//!
//! Each command parses raw input at the boundary, runs the pure core, and
//! writes the rendered report to `out`. Errors carry their typed cause
//! ([`InputError`](crate::error::InputError) or
//! [`OverflowError`](crate::core::arithmetic::OverflowError)) so the binary
//! can map them to exit codes.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::arithmetic::evaluate_with;
use crate::core::digits::decompose;
use crate::core::types::{ArithmeticReport, DigitSummary, OperandPair};
use crate::io::config::ReporterConfig;
use crate::io::input::{parse_operand, parse_operands, read_operands};
use crate::io::render::{render_digits, render_report};

/// Where the two operands come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandSource {
    /// Raw command-line tokens (count not yet checked).
    Args(Vec<String>),
    /// Whitespace-separated tokens read from standard input.
    Stdin,
}

/// Evaluate two operands and write the five-line report.
pub fn run_evaluate<R: Read, W: Write>(
    source: &OperandSource,
    cfg: &ReporterConfig,
    stdin: R,
    out: &mut W,
) -> Result<ArithmeticReport> {
    let pair = match source {
        OperandSource::Args(tokens) => parse_operands(tokens)?,
        OperandSource::Stdin => read_operands(stdin, cfg.input_limit_bytes)?,
    };
    report_pair(pair, cfg, out)
}

fn report_pair<W: Write>(
    pair: OperandPair,
    cfg: &ReporterConfig,
    out: &mut W,
) -> Result<ArithmeticReport> {
    debug!(a = pair.a(), b = pair.b(), policy = ?cfg.overflow, "evaluating operands");
    let report = evaluate_with(pair, cfg.overflow)?;
    if report.division_by_zero {
        info!(a = pair.a(), "division by zero; quotient and remainder set to 0");
    }
    let rendered = render_report(&report, cfg.format)?;
    out.write_all(rendered.as_bytes()).context("write report")?;
    Ok(report)
}

/// Decompose one integer into its digit summary and write it.
pub fn run_digits<W: Write>(
    token: &str,
    cfg: &ReporterConfig,
    out: &mut W,
) -> Result<DigitSummary> {
    let n = parse_operand(token)?;
    let summary = decompose(n);
    debug!(n, digits = summary.digit_count, "decomposed digits");
    let rendered = render_digits(&summary, cfg.format)?;
    out.write_all(rendered.as_bytes()).context("write digit summary")?;
    Ok(summary)
}

//! Integer arithmetic reporter.
//!
//! `reporter <a> <b>` prints sum, subtraction, multiplication, integer
//! division and remainder of two integers. A zero divisor prints a notice and
//! reports quotient and remainder as `0`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use reporter::commands::{OperandSource, run_digits, run_evaluate};
use reporter::core::arithmetic::OverflowError;
use reporter::error::InputError;
use reporter::exit_codes;
use reporter::io::config::{
    CliOverrides, DEFAULT_CONFIG_FILE, ReporterConfig, apply_overrides, load_config,
};
use reporter::io::render::OutputFormat;
use reporter::logging;
use tracing::debug;

const USAGE: &str = "usage: reporter <a> <b>";

#[derive(Parser)]
#[command(
    name = "reporter",
    version,
    about = "Report sum, difference, product, quotient and remainder of two integers",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    evaluate: EvaluateArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Print sum, product, count and average of an integer's decimal digits.
    Digits {
        /// Integer literal; negative values use their magnitude.
        #[arg(allow_negative_numbers = true)]
        number: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct EvaluateArgs {
    /// Two integer literals `<a> <b>`.
    #[arg(value_name = "OPERAND", allow_negative_numbers = true)]
    operands: Vec<String>,

    /// Read the two operands from standard input instead.
    #[arg(long, conflicts_with = "operands")]
    stdin: bool,

    /// Fail on overflow instead of wrapping around.
    #[arg(long)]
    checked: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file path.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(Command::Digits { number, output }) => {
            let cfg = resolve_config(&output, false)?;
            run_digits(&number, &cfg, &mut out)?;
        }
        None => {
            let args = cli.evaluate;
            let cfg = resolve_config(&args.output, args.checked)?;
            let source = if args.stdin {
                OperandSource::Stdin
            } else {
                OperandSource::Args(args.operands)
            };
            run_evaluate(&source, &cfg, std::io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}

fn resolve_config(output: &OutputArgs, checked: bool) -> Result<ReporterConfig> {
    let base = load_config(&output.config)?;
    let overrides = CliOverrides {
        checked,
        format: output.format,
    };
    let cfg = apply_overrides(base, &overrides)?;
    debug!(config = %output.config.display(), ?cfg, "resolved config");
    Ok(cfg)
}

/// Map an error chain to a stable exit code, printing usage where it helps.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(input) = err.downcast_ref::<InputError>() {
        if matches!(input, InputError::InvalidArgumentCount { .. }) {
            eprintln!("{USAGE}");
        }
        return exit_codes::USAGE;
    }
    if err.downcast_ref::<OverflowError>().is_some() {
        return exit_codes::OVERFLOW;
    }
    exit_codes::INVALID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_operands() {
        let cli = Cli::parse_from(["reporter", "10", "3"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.evaluate.operands, vec!["10", "3"]);
        assert!(!cli.evaluate.stdin);
    }

    #[test]
    fn parse_negative_operands() {
        let cli = Cli::parse_from(["reporter", "-10", "-3"]);
        assert_eq!(cli.evaluate.operands, vec!["-10", "-3"]);
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from(["reporter", "--checked", "--format", "json", "1", "2"]);
        assert!(cli.evaluate.checked);
        assert_eq!(cli.evaluate.output.format, Some(OutputFormat::Json));
        assert_eq!(cli.evaluate.output.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_digits_subcommand() {
        let cli = Cli::parse_from(["reporter", "digits", "-1234"]);
        assert!(matches!(
            cli.command,
            Some(Command::Digits { ref number, .. }) if number == "-1234"
        ));
    }

    #[test]
    fn stdin_conflicts_with_operands() {
        assert!(Cli::try_parse_from(["reporter", "--stdin", "1", "2"]).is_err());
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        let count = anyhow::Error::new(InputError::InvalidArgumentCount {
            expected: 2,
            found: 1,
        });
        assert_eq!(exit_code_for(&count), exit_codes::USAGE);

        let overflow = anyhow::Error::new(OverflowError {
            operation: reporter::core::arithmetic::Operation::Product,
        })
        .context("evaluate");
        assert_eq!(exit_code_for(&overflow), exit_codes::OVERFLOW);

        let other = anyhow::anyhow!("read reporter.toml");
        assert_eq!(exit_code_for(&other), exit_codes::INVALID);
    }
}

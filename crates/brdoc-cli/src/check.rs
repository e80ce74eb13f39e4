//! # Check Subcommand
//!
//! Classifies and validates each input with
//! [`validate_document`](brdoc_core::validate_document).
//!
//! Text output is one tab-separated line per input:
//!
//! ```text
//! 123.456.789-09	CPF	CPF válido
//! 123456	UNKNOWN	Digite um CPF (11 dígitos) ou CNPJ (14 dígitos)
//! ```
//!
//! JSON output is one result object per line.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use brdoc_core::{validate_document, DocumentKind};

use crate::config::{CliConfig, OutputFormat};
use crate::feedback::feedback_line;
use crate::{collect_inputs, EXIT_INVALID, EXIT_OK};

/// Arguments for the `brdoc check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Documents to check. Reads one per line from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

/// Tally of a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub total: usize,
    pub valid: usize,
    pub cpf: usize,
    pub cnpj: usize,
    pub unknown: usize,
}

impl CheckSummary {
    /// Number of inputs that did not validate.
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }
}

/// Execute the check subcommand against stdin/stdout.
///
/// Returns exit code: 0 on success, 1 if any input is invalid and
/// `fail_on_invalid` is set.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let inputs = collect_inputs(&args.inputs, std::io::stdin().lock())?;
    let mut stdout = std::io::stdout().lock();
    let summary = check_inputs(&inputs, config.output, &mut stdout)?;

    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid(),
        cpf = summary.cpf,
        cnpj = summary.cnpj,
        unknown = summary.unknown,
        "check complete"
    );

    if config.fail_on_invalid && summary.invalid() > 0 {
        Ok(EXIT_INVALID)
    } else {
        Ok(EXIT_OK)
    }
}

/// Validate every input and write one line per result to `out`.
pub fn check_inputs(
    inputs: &[String],
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for input in inputs {
        let result = validate_document(input);
        tracing::debug!(kind = %result.kind, valid = result.is_valid, "checked input");

        summary.total += 1;
        if result.is_valid {
            summary.valid += 1;
        }
        match result.kind {
            DocumentKind::Cpf => summary.cpf += 1,
            DocumentKind::Cnpj => summary.cnpj += 1,
            DocumentKind::Unknown => summary.unknown += 1,
        }

        let written = match output {
            OutputFormat::Text => writeln!(
                out,
                "{}\t{}\t{}",
                result.formatted,
                result.kind,
                feedback_line(input, &result)
            ),
            OutputFormat::Json => {
                let line = serde_json::to_string(&result).context("failed to encode result")?;
                writeln!(out, "{line}")
            }
        };
        written.context("failed to write output")?;
    }

    Ok(summary)
}

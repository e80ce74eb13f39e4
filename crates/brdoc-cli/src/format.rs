//! # Format Subcommand
//!
//! Prints the masked form of each input. With `--as auto` (the default)
//! the mask follows [`validate_document`]: 11 digits get the CPF mask,
//! 14 digits the CNPJ mask, and anything else is echoed unchanged.
//! `--as cpf` / `--as cnpj` apply one mask progressively regardless of
//! length, and `--as digits` prints the normalized digit string.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use brdoc_core::{format_cnpj, format_cpf, normalize, validate_document};

use crate::collect_inputs;
use crate::config::{CliConfig, OutputFormat};
use crate::EXIT_OK;

/// Which mask to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MaskKind {
    /// Pick CPF or CNPJ by digit count; leave other input unchanged.
    #[default]
    Auto,
    /// Always apply the CPF mask.
    Cpf,
    /// Always apply the CNPJ mask.
    Cnpj,
    /// Strip everything but digits.
    Digits,
}

impl MaskKind {
    /// Apply this mask to `input`.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Auto => validate_document(input).formatted,
            Self::Cpf => format_cpf(input),
            Self::Cnpj => format_cnpj(input),
            Self::Digits => normalize(input),
        }
    }
}

/// Arguments for the `brdoc format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Mask to apply.
    #[arg(long = "as", value_enum, default_value_t = MaskKind::Auto)]
    pub mask: MaskKind,

    /// Values to format. Reads one per line from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

#[derive(Serialize)]
struct FormattedRecord<'a> {
    input: &'a str,
    formatted: String,
}

/// Execute the format subcommand against stdin/stdout. Always exits 0.
pub fn run_format(args: &FormatArgs, config: &CliConfig) -> Result<u8> {
    let inputs = collect_inputs(&args.inputs, std::io::stdin().lock())?;
    let mut stdout = std::io::stdout().lock();
    format_inputs(&inputs, args.mask, config.output, &mut stdout)?;
    tracing::info!(count = inputs.len(), mask = ?args.mask, "format complete");
    Ok(EXIT_OK)
}

/// Mask every input and write one line per value to `out`.
pub fn format_inputs(
    inputs: &[String],
    mask: MaskKind,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for input in inputs {
        let formatted = mask.apply(input);
        let written = match output {
            OutputFormat::Text => writeln!(out, "{formatted}"),
            OutputFormat::Json => {
                let record = FormattedRecord { input, formatted };
                let line = serde_json::to_string(&record).context("failed to encode record")?;
                writeln!(out, "{line}")
            }
        };
        written.context("failed to write output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[&str], mask: MaskKind, output: OutputFormat) -> String {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        format_inputs(&inputs, mask, output, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn auto_masks_by_length() {
        let out = run(
            &["12345678909", "11222333000181", "12345"],
            MaskKind::Auto,
            OutputFormat::Text,
        );
        assert_eq!(out, "123.456.789-09\n11.222.333/0001-81\n12345\n");
    }

    #[test]
    fn explicit_masks_are_progressive() {
        assert_eq!(run(&["12345"], MaskKind::Cpf, OutputFormat::Text), "123.45\n");
        assert_eq!(run(&["112"], MaskKind::Cnpj, OutputFormat::Text), "11.2\n");
    }

    #[test]
    fn digits_mask_normalizes() {
        assert_eq!(
            run(&["11.222.333/0001-81"], MaskKind::Digits, OutputFormat::Text),
            "11222333000181\n"
        );
    }

    #[test]
    fn json_records_include_input() {
        let out = run(&["123456789"], MaskKind::Cpf, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"input": "123456789", "formatted": "123.456.789"})
        );
    }
}

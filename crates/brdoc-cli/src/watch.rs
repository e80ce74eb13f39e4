//! # Watch Subcommand
//!
//! A line-oriented CPF/CNPJ input field. Each stdin line is taken as the
//! field's complete current text, as if the user had typed or pasted it,
//! and the field re-validates on every line:
//!
//! - Text that normalizes to more than 14 digits is refused and the field
//!   keeps its previous state.
//! - The line `:clear` empties the field.
//! - Every accepted line prints the masked value and feedback.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use brdoc_core::{normalize, validate_document, ValidationResult, MAX_DOCUMENT_DIGITS};

use crate::config::{CliConfig, OutputFormat};
use crate::feedback::{error_message, success_message, INITIAL_INVALID_MESSAGE};
use crate::EXIT_OK;

/// Line that resets the field.
pub const CLEAR_COMMAND: &str = ":clear";

/// Arguments for the `brdoc watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Initial field contents.
    #[arg(long, default_value = "")]
    pub initial: String,
}

/// State of one document input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentField {
    /// Raw text as entered.
    pub value: String,
    #[serde(flatten)]
    pub result: ValidationResult,
    /// Message to show under the field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of [`DocumentField::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Accepted,
    /// The text had this many digits, more than any document allows.
    TooLong(usize),
}

impl DocumentField {
    /// A field pre-filled with `initial`. Any initial value that is not a
    /// valid document, including the empty string, starts with the
    /// generic "Documento inválido" error.
    pub fn new(initial: &str) -> Self {
        let result = validate_document(initial);
        let error = (!result.is_valid).then(|| INITIAL_INVALID_MESSAGE.to_string());
        Self {
            value: initial.to_string(),
            result,
            error,
        }
    }

    /// Replace the field's text and re-validate. Text with more than
    /// [`MAX_DOCUMENT_DIGITS`] digits is refused and nothing changes.
    pub fn update(&mut self, value: &str) -> Update {
        let digits = normalize(value).len();
        if digits > MAX_DOCUMENT_DIGITS {
            return Update::TooLong(digits);
        }
        let result = validate_document(value);
        self.error = error_message(value, &result);
        self.value = value.to_string();
        self.result = result;
        Update::Accepted
    }

    /// Reset to an empty field with no error.
    pub fn clear(&mut self) {
        self.value.clear();
        self.result = ValidationResult::empty();
        self.error = None;
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// One line of display: masked value, then success or error message.
    pub fn display_line(&self) -> String {
        let message = success_message(&self.result)
            .or_else(|| self.error.clone())
            .unwrap_or_default();
        if message.is_empty() {
            self.result.formatted.clone()
        } else {
            format!("{}\t{}", self.result.formatted, message)
        }
    }
}

/// Execute the watch subcommand against stdin/stdout.
pub fn run_watch(args: &WatchArgs, config: &CliConfig) -> Result<u8> {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let field = watch(&args.initial, stdin, config.output, &mut stdout)?;
    tracing::info!(valid = field.is_valid(), kind = %field.result.kind, "watch finished");
    Ok(EXIT_OK)
}

/// Drive a [`DocumentField`] from `lines`, writing its state to `out`
/// after every accepted line. Returns the final field state.
pub fn watch(
    initial: &str,
    lines: impl BufRead,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<DocumentField> {
    let mut field = DocumentField::new(initial);

    for line in lines.lines() {
        let line = line.context("failed to read input from stdin")?;
        let line = line.trim_end_matches('\r');

        if line == CLEAR_COMMAND {
            field.clear();
            tracing::debug!("field cleared");
        } else {
            match field.update(line) {
                Update::Accepted => {
                    tracing::debug!(
                        kind = %field.result.kind,
                        valid = field.is_valid(),
                        "field updated"
                    );
                }
                Update::TooLong(digits) => {
                    tracing::warn!(
                        digits,
                        max = MAX_DOCUMENT_DIGITS,
                        "input refused: too many digits"
                    );
                    continue;
                }
            }
        }

        let written = match output {
            OutputFormat::Text => writeln!(out, "{}", field.display_line()),
            OutputFormat::Json => {
                let json = serde_json::to_string(&field).context("failed to encode field")?;
                writeln!(out, "{json}")
            }
        };
        written.context("failed to write output")?;
    }

    Ok(field)
}

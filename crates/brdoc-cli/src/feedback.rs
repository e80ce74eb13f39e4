//! # User Feedback
//!
//! Turns a [`ValidationResult`] into the short Portuguese messages shown
//! next to a CPF/CNPJ input field. The core library only reports type and
//! validity; wording is a presentation concern and lives here.

use brdoc_core::{DocumentKind, ValidationResult};

/// Shown when the digit count matches neither document.
pub const UNKNOWN_LENGTH_MESSAGE: &str = "Digite um CPF (11 dígitos) ou CNPJ (14 dígitos)";

/// Shown when a field starts out with an invalid initial value.
pub const INITIAL_INVALID_MESSAGE: &str = "Documento inválido";

/// Error message for `input`, or `None` when there is nothing to complain
/// about (empty input or a valid document).
pub fn error_message(input: &str, result: &ValidationResult) -> Option<String> {
    if input.is_empty() || result.is_valid {
        return None;
    }
    Some(match result.kind {
        DocumentKind::Unknown => UNKNOWN_LENGTH_MESSAGE.to_string(),
        kind => format!("{kind} inválido"),
    })
}

/// Success message (`"CPF válido"`), or `None` if the document is invalid.
pub fn success_message(result: &ValidationResult) -> Option<String> {
    result.is_valid.then(|| format!("{} válido", result.kind))
}

/// The single line of feedback to show for `input`: the success message,
/// the error message, or an empty string.
pub fn feedback_line(input: &str, result: &ValidationResult) -> String {
    success_message(result)
        .or_else(|| error_message(input, result))
        .unwrap_or_default()
}

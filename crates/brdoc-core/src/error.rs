//! # Error Types
//!
//! The free functions in this crate never fail; they report invalid input
//! as `false` or [`DocumentKind::Unknown`](crate::DocumentKind::Unknown).
//! Errors exist only for the validated newtypes in [`crate::document`],
//! where an invalid value must not be constructed at all.

use thiserror::Error;

/// Rejection of a value by a validating document constructor.
///
/// Each variant carries the raw input so that callers can report exactly
/// what was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not an 11-digit CPF with matching check digits.
    #[error("invalid CPF: \"{0}\" (expected 11 digits with valid check digits, e.g. 123.456.789-09)")]
    InvalidCpf(String),

    /// Not a 14-digit CNPJ with matching check digits.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with valid check digits, e.g. 11.222.333/0001-81)")]
    InvalidCnpj(String),

    /// Digit count matches neither document.
    #[error("unrecognized document: \"{input}\" has {digits} digits (expected 11 for CPF or 14 for CNPJ)")]
    UnknownLength {
        /// The raw input.
        input: String,
        /// Number of digits after normalization.
        digits: usize,
    },
}

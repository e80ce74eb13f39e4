//! # Document Validation
//!
//! Check-digit validation for CPF and CNPJ, plus [`validate_document`],
//! which classifies free-form input by its digit count and validates and
//! masks it accordingly.
//!
//! Nothing here returns an error. Input of the wrong length, repeated
//! digits, letters, or garbage all simply validate as `false`.

use serde::{Deserialize, Serialize};

use crate::checksum::{cnpj_check_digits, cpf_check_digits, is_repeated};
use crate::format::{format_cnpj, format_cpf};
use crate::normalize::digit_values;
use crate::{CNPJ_LENGTH, CPF_LENGTH};

/// The kind of document a digit string looks like, judged by length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// 11 digits.
    Cpf,
    /// 14 digits.
    Cnpj,
    /// Any other length.
    Unknown,
}

impl DocumentKind {
    /// Classify a digit count.
    pub fn from_digit_count(count: usize) -> Self {
        match count {
            CPF_LENGTH => Self::Cpf,
            CNPJ_LENGTH => Self::Cnpj,
            _ => Self::Unknown,
        }
    }

    /// The canonical upper-case name (`"CPF"`, `"CNPJ"`, `"UNKNOWN"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_document`].
///
/// Serializes as `{"isValid": .., "type": "CPF", "formatted": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the check digits match (always `false` for `Unknown`).
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    /// Classification by digit count.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Masked digits for `Cpf`/`Cnpj`, the raw input untouched for `Unknown`.
    pub formatted: String,
}

impl ValidationResult {
    /// The result for an empty input.
    pub fn empty() -> Self {
        Self {
            is_valid: false,
            kind: DocumentKind::Unknown,
            formatted: String::new(),
        }
    }
}

/// True when `input` holds exactly 11 digits, they are not all the same,
/// and both CPF check digits match.
pub fn validate_cpf(input: &str) -> bool {
    let digits = digit_values(input);
    digits.len() == CPF_LENGTH
        && !is_repeated(&digits)
        && cpf_check_digits(&digits).is_some_and(|check| check[..] == digits[CPF_LENGTH - 2..])
}

/// True when `input` holds exactly 14 digits, they are not all the same,
/// and both CNPJ check digits match.
pub fn validate_cnpj(input: &str) -> bool {
    let digits = digit_values(input);
    digits.len() == CNPJ_LENGTH
        && !is_repeated(&digits)
        && cnpj_check_digits(&digits).is_some_and(|check| check[..] == digits[CNPJ_LENGTH - 2..])
}

/// Classify `input` by digit count, then validate and mask it.
///
/// - 11 digits: CPF, validated with [`validate_cpf`], masked with [`format_cpf`].
/// - 14 digits: CNPJ, validated with [`validate_cnpj`], masked with [`format_cnpj`].
/// - Otherwise: `Unknown`, invalid, and `formatted` is `input` unchanged.
pub fn validate_document(input: &str) -> ValidationResult {
    let kind = DocumentKind::from_digit_count(digit_values(input).len());
    match kind {
        DocumentKind::Cpf => ValidationResult {
            is_valid: validate_cpf(input),
            kind,
            formatted: format_cpf(input),
        },
        DocumentKind::Cnpj => ValidationResult {
            is_valid: validate_cnpj(input),
            kind,
            formatted: format_cnpj(input),
        },
        DocumentKind::Unknown => ValidationResult {
            is_valid: false,
            kind,
            formatted: input.to_string(),
        },
    }
}

//! # brdoc-core — CPF and CNPJ Primitives
//!
//! Normalization, progressive masking, and check-digit validation for the
//! two Brazilian taxpayer identifiers:
//!
//! - **CPF** (Cadastro de Pessoas Físicas): 11 digits, `ddd.ddd.ddd-dd`.
//! - **CNPJ** (Cadastro Nacional da Pessoa Jurídica): 14 digits, `dd.ddd.ddd/dddd-dd`.
//!
//! ## Key Design Principles
//!
//! 1. **Everything starts at [`normalize`].** Every formatter and validator
//!    strips non-digits first, so punctuated and bare input behave the same.
//!
//! 2. **Validation never fails loudly.** [`validate_cpf`], [`validate_cnpj`]
//!    and [`validate_document`] return `bool` / [`ValidationResult`] for any
//!    input. Malformed text is simply invalid.
//!
//! 3. **Classification is by length only.** 11 digits is a CPF and 14 digits
//!    is a CNPJ, whether or not the check digits match.
//!
//! 4. **Newtypes for validated values.** [`Cpf`] and [`Cnpj`] can only be
//!    constructed from input that passes the checksum.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod document;
pub mod error;
pub mod format;
pub mod normalize;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use checksum::{cnpj_check_digits, cpf_check_digits};
pub use document::{Cnpj, Cpf, Document};
pub use error::ValidationError;
pub use format::{format_cnpj, format_cpf};
pub use normalize::normalize;
pub use validate::{
    validate_cnpj, validate_cpf, validate_document, DocumentKind, ValidationResult,
};

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Longest digit string any supported document can have. Input fields
/// should refuse text that normalizes to more digits than this.
pub const MAX_DOCUMENT_DIGITS: usize = CNPJ_LENGTH;

//! # Document Newtypes
//!
//! Validated wrappers for CPF and CNPJ numbers. A [`Cpf`] or [`Cnpj`] can
//! only exist if its check digits are correct, so code that receives one
//! never has to validate again.
//!
//! Both types accept any punctuation on input and store the canonical
//! digit string. They serialize as bare digits and display in masked form.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::format::{format_cnpj, format_cpf};
use crate::normalize::normalize;
use crate::validate::{validate_cnpj, validate_cpf, DocumentKind};
use crate::{CNPJ_LENGTH, CPF_LENGTH};

/// Implement `Deserialize` by reading a plain `String` and routing it
/// through the type's `new()` constructor, so invalid documents are
/// rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A CPF with valid check digits.
///
/// Stored as 11 digits. Accepts `"12345678909"`, `"123.456.789-09"`, or any
/// other punctuation around the same digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF, validating length, repeated digits, and check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if [`validate_cpf`] rejects
    /// the input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cpf(&raw) {
            return Err(ValidationError::InvalidCpf(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// The canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked form: `ddd.ddd.ddd-dd`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[CPF_LENGTH - 2..]
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A CNPJ with valid check digits.
///
/// Stored as 14 digits. The first eight identify the company, the next
/// four the branch (`0001` for the head office).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ, validating length, repeated digits, and check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] if [`validate_cnpj`]
    /// rejects the input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cnpj(&raw) {
            return Err(ValidationError::InvalidCnpj(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// The canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked form: `dd.ddd.ddd/dddd-dd`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }

    /// The eight-digit company root shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The four-digit branch number.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[CNPJ_LENGTH - 2..]
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Either a validated CPF or a validated CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "UPPERCASE")]
pub enum Document {
    /// Individual taxpayer.
    Cpf(Cpf),
    /// Legal entity.
    Cnpj(Cnpj),
}

impl Document {
    /// Classify `input` by digit count and validate it as that document.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownLength`] if the digit count is neither 11 nor 14.
    /// - [`ValidationError::InvalidCpf`] / [`ValidationError::InvalidCnpj`]
    ///   if the check digits do not match.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let digits = normalize(input).len();
        match DocumentKind::from_digit_count(digits) {
            DocumentKind::Cpf => Cpf::new(input).map(Self::Cpf),
            DocumentKind::Cnpj => Cnpj::new(input).map(Self::Cnpj),
            DocumentKind::Unknown => Err(ValidationError::UnknownLength {
                input: input.to_string(),
                digits,
            }),
        }
    }

    /// Which document this is.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// The canonical digit string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// The masked form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf(cpf) => write!(f, "{cpf}"),
            Self::Cnpj(cnpj) => write!(f, "{cnpj}"),
        }
    }
}

impl std::str::FromStr for Document {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

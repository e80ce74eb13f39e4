//! # Progressive Masking
//!
//! Applies the CPF and CNPJ punctuation masks to however many digits the
//! input currently holds, so a partially typed document is displayed with
//! the separators it has earned so far:
//!
//! | Digits | CPF | CNPJ |
//! |--------|-----|------|
//! | `12` | `12` | `12` |
//! | `1234` | `123.4` | `12.34` |
//! | `123456789` | `123.456.789` | `12.345.678/9` |
//! | full | `123.456.789-09` | `11.222.333/0001-81` |
//!
//! A separator is only emitted when at least one digit follows it, and
//! digits past the document length are dropped.

use crate::normalize::normalize;
use crate::{CNPJ_LENGTH, CPF_LENGTH};

/// A punctuation mask: the digit capacity and the separators inserted
/// after a given number of digits.
struct Mask {
    len: usize,
    separators: &'static [(usize, char)],
}

const CPF_MASK: Mask = Mask {
    len: CPF_LENGTH,
    separators: &[(3, '.'), (6, '.'), (9, '-')],
};

const CNPJ_MASK: Mask = Mask {
    len: CNPJ_LENGTH,
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
};

impl Mask {
    fn apply(&self, raw: &str) -> String {
        let digits = normalize(raw);
        // Normalized input is ASCII, so byte offsets are digit offsets.
        let digits = &digits[..digits.len().min(self.len)];

        let mut out = String::with_capacity(digits.len() + self.separators.len());
        let mut start = 0;
        for &(at, sep) in self.separators {
            if digits.len() <= at {
                break;
            }
            out.push_str(&digits[start..at]);
            out.push(sep);
            start = at;
        }
        out.push_str(&digits[start..]);
        out
    }
}

/// Mask the digits of `raw` as a CPF (`ddd.ddd.ddd-dd`).
///
/// Partial input is masked up to the digits present; anything past the
/// eleventh digit is dropped.
pub fn format_cpf(raw: &str) -> String {
    CPF_MASK.apply(raw)
}

/// Mask the digits of `raw` as a CNPJ (`dd.ddd.ddd/dddd-dd`).
///
/// Partial input is masked up to the digits present; anything past the
/// fourteenth digit is dropped.
pub fn format_cnpj(raw: &str) -> String {
    CNPJ_MASK.apply(raw)
}

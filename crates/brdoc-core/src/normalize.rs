//! # Normalization
//!
//! Reduces free-form input to its ASCII digits. This is the first step of
//! every formatter and validator in the crate.

/// Strip every character that is not an ASCII digit, preserving order.
///
/// Non-ASCII digits (full-width, Arabic-Indic, ...) are removed as well.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Digit values (0-9) of the normalized input.
pub(crate) fn digit_values(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

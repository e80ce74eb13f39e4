//! # Check-Digit Arithmetic
//!
//! Both documents end in two modulo-11 check digits computed from weighted
//! sums of the preceding digits. The second check digit always covers the
//! first one.
//!
//! ## CPF
//!
//! Weights descend from 10 (first digit) and 11 (second digit) down to 2.
//! The digit is `(sum * 10) mod 11`, with 10 mapped to 0.
//!
//! ## CNPJ
//!
//! Weights cycle `5..2, 9..2` (first digit) and `6..2, 9..2` (second).
//! The digit is `0` when `sum mod 11 < 2`, otherwise `11 - (sum mod 11)`.

/// Digits covered by the first CPF check digit.
const CPF_BASE_LEN: usize = 9;

/// Digits covered by the first CNPJ check digit.
const CNPJ_BASE_LEN: usize = 12;

const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn weighted_sum(digits: &[u8], weights: impl IntoIterator<Item = u32>) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, w)| u32::from(d) * w)
        .sum()
}

fn cpf_digit(digits: &[u8]) -> u8 {
    // Weights run from len + 1 down to 2.
    let top = digits.len() as u32 + 1;
    let sum = weighted_sum(digits, (2..=top).rev());
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

fn cnpj_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let r = weighted_sum(digits, weights.iter().copied()) % 11;
    if r < 2 {
        0
    } else {
        (11 - r) as u8
    }
}

/// Compute the two CPF check digits for the first nine digit values of
/// `base`. Any values past the ninth are ignored.
///
/// Returns `None` when `base` holds fewer than nine digits.
pub fn cpf_check_digits(base: &[u8]) -> Option<[u8; 2]> {
    let base = base.get(..CPF_BASE_LEN)?;
    let first = cpf_digit(base);

    let mut extended = [0u8; CPF_BASE_LEN + 1];
    extended[..CPF_BASE_LEN].copy_from_slice(base);
    extended[CPF_BASE_LEN] = first;
    let second = cpf_digit(&extended);

    Some([first, second])
}

/// Compute the two CNPJ check digits for the first twelve digit values of
/// `base`. Any values past the twelfth are ignored.
///
/// Returns `None` when `base` holds fewer than twelve digits.
pub fn cnpj_check_digits(base: &[u8]) -> Option<[u8; 2]> {
    let base = base.get(..CNPJ_BASE_LEN)?;
    let first = cnpj_digit(base, &CNPJ_WEIGHTS_FIRST);

    let mut extended = [0u8; CNPJ_BASE_LEN + 1];
    extended[..CNPJ_BASE_LEN].copy_from_slice(base);
    extended[CNPJ_BASE_LEN] = first;
    let second = cnpj_digit(&extended, &CNPJ_WEIGHTS_SECOND);

    Some([first, second])
}

/// True when `digits` is non-empty and every value is the same.
///
/// Sequences like `000.000.000-00` satisfy the checksum arithmetic but are
/// never issued, so validators reject them up front.
pub fn is_repeated(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn cpf_known_documents() {
        assert_eq!(cpf_check_digits(&values("123456789")), Some([0, 9]));
        assert_eq!(cpf_check_digits(&values("111444777")), Some([3, 5]));
    }

    #[test]
    fn cpf_ignores_trailing_values() {
        assert_eq!(cpf_check_digits(&values("12345678999")), Some([0, 9]));
    }

    #[test]
    fn cpf_requires_nine_digits() {
        assert_eq!(cpf_check_digits(&values("12345678")), None);
        assert_eq!(cpf_check_digits(&[]), None);
    }

    #[test]
    fn cpf_remainder_ten_maps_to_zero() {
        // sum = 1 * 2; 20 mod 11 = 9
        assert_eq!(cpf_check_digits(&values("000000001")).map(|d| d[0]), Some(9));
        // sum = 6 * 2; 120 mod 11 = 10
        assert_eq!(cpf_check_digits(&values("000000006")).map(|d| d[0]), Some(0));
    }

    #[test]
    fn cnpj_known_document() {
        assert_eq!(cnpj_check_digits(&values("112223330001")), Some([8, 1]));
    }

    #[test]
    fn cnpj_requires_twelve_digits() {
        assert_eq!(cnpj_check_digits(&values("11222333000")), None);
    }

    #[test]
    fn cnpj_small_remainder_maps_to_zero() {
        // All zeros: sum 0 -> remainder 0 -> digit 0 for both.
        assert_eq!(cnpj_check_digits(&[0; 12]), Some([0, 0]));
    }

    #[test]
    fn repeated_detection() {
        assert!(is_repeated(&[1; 11]));
        assert!(is_repeated(&[0; 14]));
        assert!(is_repeated(&[7]));
        assert!(!is_repeated(&values("12345678909")));
        assert!(!is_repeated(&values("11111111112")));
        assert!(!is_repeated(&[]));
    }
}

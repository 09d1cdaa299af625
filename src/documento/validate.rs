//! Modulo-11 check-digit validation for CPF and CNPJ.

use thiserror::Error;

use super::DocumentKind;
use super::format::extract_digits;

const CPF_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Why an identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Wrong number of digits after stripping punctuation.
    #[error("{kind} must have {expected} digits, got {found}")]
    WrongLength {
        kind: DocumentKind,
        expected: usize,
        found: usize,
    },

    /// Every digit is the same, e.g. "000.000.000-00".
    #[error("{kind} with all digits equal is not valid")]
    RepeatedDigits { kind: DocumentKind },

    /// The trailing verification digits don't match the computed ones.
    #[error("{kind} check digits do not match (expected {expected})")]
    CheckDigitMismatch {
        kind: DocumentKind,
        expected: String,
    },

    /// Document type string other than "cpf" / "cnpj".
    #[error("unknown document type '{0}'")]
    UnknownKind(String),
}

/// Validate a CPF or CNPJ and return its bare digits.
///
/// Punctuation is ignored. The value is rejected when the digit count is
/// wrong, when all digits are identical (these pass the arithmetic), or
/// when either check digit differs from the computed one.
pub fn check_document(value: &str, kind: DocumentKind) -> Result<String, DocumentError> {
    let cleaned = extract_digits(value);
    if cleaned.len() != kind.max_len() {
        return Err(DocumentError::WrongLength {
            kind,
            expected: kind.max_len(),
            found: cleaned.len(),
        });
    }

    let digits = to_values(&cleaned);
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(DocumentError::RepeatedDigits { kind });
    }

    let base_len = kind.max_len() - 2;
    let expected = compute(&digits[..base_len], kind);
    if digits[base_len..] != expected {
        return Err(DocumentError::CheckDigitMismatch {
            kind,
            expected: format!("{}{}", expected[0], expected[1]),
        });
    }

    Ok(cleaned)
}

/// Validate a CPF (11 digits).
pub fn validate_cpf(value: &str) -> bool {
    check_document(value, DocumentKind::Cpf).is_ok()
}

/// Validate a CNPJ (14 digits).
pub fn validate_cnpj(value: &str) -> bool {
    check_document(value, DocumentKind::Cnpj).is_ok()
}

/// Validate an identifier of the given kind.
pub fn validate_document(value: &str, kind: DocumentKind) -> bool {
    check_document(value, kind).is_ok()
}

/// Compute the two verification digits for an identifier base.
///
/// `base` must contain exactly 9 digits for a CPF or 12 for a CNPJ
/// (punctuation is ignored). Returns `None` otherwise.
pub fn check_digits(base: &str, kind: DocumentKind) -> Option<[u8; 2]> {
    let cleaned = extract_digits(base);
    if cleaned.len() != kind.max_len() - 2 {
        return None;
    }
    Some(compute(&to_values(&cleaned), kind))
}

fn compute(base: &[u8], kind: DocumentKind) -> [u8; 2] {
    let (w1, w2): (&[u32], &[u32]) = match kind {
        DocumentKind::Cpf => (&CPF_WEIGHTS_1, &CPF_WEIGHTS_2),
        DocumentKind::Cnpj => (&CNPJ_WEIGHTS_1, &CNPJ_WEIGHTS_2),
    };
    let first = mod11(base, w1);
    let mut extended = base.to_vec();
    extended.push(first);
    let second = mod11(&extended, w2);
    [first, second]
}

fn mod11(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let rest = sum % 11;
    if rest < 2 { 0 } else { (11 - rest) as u8 }
}

// Input is already ASCII digits only.
fn to_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

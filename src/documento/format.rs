//! Display masks for CPF (`NNN.NNN.NNN-NN`) and CNPJ (`NN.NNN.NNN/NNNN-NN`).

use super::DocumentKind;

/// (digit position, separator inserted before it)
const CPF_MASK: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];
const CNPJ_MASK: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Keep only ASCII digits.
pub fn extract_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digits only, cut to the length of a complete identifier of `kind`.
pub fn clamp_digits(value: &str, kind: DocumentKind) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(kind.max_len())
        .collect()
}

/// Number of digits in a complete identifier of `kind` (11 or 14).
pub fn max_length(kind: DocumentKind) -> usize {
    kind.max_len()
}

/// Apply the display mask for `kind` to whatever digits `value` contains.
///
/// Works on partial input, so it can run on every keystroke: separators
/// only appear once a digit follows them ("5299" -> "529.9"). Extra
/// digits beyond the identifier length are dropped.
pub fn format_document(value: &str, kind: DocumentKind) -> String {
    let mask = match kind {
        DocumentKind::Cpf => CPF_MASK,
        DocumentKind::Cnpj => CNPJ_MASK,
    };

    let digits = clamp_digits(value, kind);
    let mut out = String::with_capacity(digits.len() + mask.len());
    for (i, ch) in digits.chars().enumerate() {
        if let Some(&(_, sep)) = mask.iter().find(|(pos, _)| *pos == i) {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

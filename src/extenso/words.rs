//! Portuguese cardinal numbers in words (0 to 999 999 999).

use serde::{Deserialize, Serialize};

/// Largest value [`integer_to_words`] can spell out.
pub const MAX_WORDS_VALUE: u64 = 999_999_999;

/// Grammatical gender for "um/uma" and "dois/duas".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// "um", "dois": reais, centavos.
    #[default]
    Masculine,
    /// "uma", "duas", as in "duas parcelas".
    Feminine,
}

static UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

static TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

static TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

static HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Spell out a non-negative integer in Brazilian Portuguese.
///
/// Groups of three digits are joined with "e": 1 500 is "mil e
/// quinhentos", 2 000 021 is "dois milhões e vinte e um". A single
/// thousand is "mil", never "um mil". `gender` only changes a trailing
/// group that is exactly 1 or 2 ("mil e uma", "duas"); compound numbers
/// such as 21 stay masculine.
///
/// Returns `None` above [`MAX_WORDS_VALUE`].
pub fn integer_to_words(n: u64, gender: Gender) -> Option<String> {
    if n > MAX_WORDS_VALUE {
        return None;
    }
    if n == 0 {
        return Some("zero".to_string());
    }

    // n <= 999_999_999, so every group fits in u32
    let millions = (n / 1_000_000) as u32;
    let thousands = (n / 1_000 % 1_000) as u32;
    let rest = (n % 1_000) as u32;

    let mut parts = Vec::with_capacity(3);
    match millions {
        0 => {}
        1 => parts.push("um milhão".to_string()),
        m => parts.push(format!("{} milhões", group_words(m))),
    }
    match thousands {
        0 => {}
        1 => parts.push("mil".to_string()),
        t => parts.push(format!("{} mil", group_words(t))),
    }
    if rest > 0 {
        parts.push(match (gender, rest) {
            (Gender::Feminine, 1) => "uma".to_string(),
            (Gender::Feminine, 2) => "duas".to_string(),
            _ => group_words(rest),
        });
    }

    Some(parts.join(" e "))
}

/// 1..=999. Zero yields an empty string.
fn group_words(n: u32) -> String {
    if n == 100 {
        return "cem".to_string();
    }
    let hundreds = (n / 100) as usize;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, _) => tens_words(rest),
        (h, 0) => HUNDREDS[h].to_string(),
        (h, r) => format!("{} e {}", HUNDREDS[h], tens_words(r)),
    }
}

/// 0..=99. Zero yields an empty string.
fn tens_words(n: u32) -> String {
    let n = n as usize;
    match n {
        0..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => format!("{} e {}", TENS[n / 10], UNITS[n % 10]),
    }
}

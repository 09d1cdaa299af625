//! Brazilian-format amounts ("1.500,50"): parsing, display and words in reais.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use super::words::{Gender, MAX_WORDS_VALUE, integer_to_words};

/// Integer digits accepted by [`parse_amount`] (leading zeros excluded).
const MAX_INTEGER_DIGITS: usize = 15;

/// Fraction digits kept by [`parse_amount`]. Only the third one matters
/// for rounding to cents.
const MAX_FRACTION_DIGITS: usize = 9;

/// Why an amount string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Nothing left after removing whitespace and thousands dots.
    #[error("amount is empty")]
    Empty,

    /// Not a decimal number in Brazilian notation.
    #[error("invalid amount '{0}'")]
    Invalid(String),

    /// Amounts must be zero or positive.
    #[error("negative amount '{0}'")]
    Negative(String),

    /// Too many integer digits.
    #[error("amount '{0}' is out of range")]
    OutOfRange(String),
}

/// Parse an amount written the Brazilian way.
///
/// Whitespace and `.` thousands separators are removed and the first `,`
/// is the decimal separator: "1.500,50", "1500,5" and " 1 500 " are all
/// accepted. A leading "-" is only tolerated on zero.
pub fn parse_amount(amount: &str) -> Result<Decimal, AmountError> {
    let normalized: String = amount
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    if normalized.is_empty() {
        return Err(AmountError::Empty);
    }

    let (negative, body) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.strip_prefix('+').unwrap_or(&normalized)),
    };
    let (int_part, frac_part) = body.split_once(',').unwrap_or((body, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return Err(AmountError::Invalid(amount.to_string()));
    }
    if int_part.trim_start_matches('0').len() > MAX_INTEGER_DIGITS {
        return Err(AmountError::OutOfRange(amount.to_string()));
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = match &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)] {
        "" => "0",
        f => f,
    };
    let value = Decimal::from_str(&format!("{int_part}.{frac_part}"))
        .map_err(|_| AmountError::Invalid(amount.to_string()))?;

    if negative && !value.is_zero() {
        return Err(AmountError::Negative(amount.to_string()));
    }
    Ok(value.abs())
}

/// Write an amount in reais as Portuguese words.
///
/// Cents are rounded half-up, and a rounding that reaches 100 cents
/// carries into the reais ("10,995" is "onze reais").
///
/// Returns `None` for negative values and from one billion reais up.
pub fn decimal_to_words(value: Decimal) -> Option<String> {
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }

    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc();
    let reais = whole.to_u64()?;
    let centavos = ((rounded - whole) * dec!(100)).to_u64()?;
    if reais > MAX_WORDS_VALUE {
        return None;
    }

    let reais_clause = match reais {
        0 => "zero".to_string(),
        1 => "um real".to_string(),
        n => format!("{} reais", integer_to_words(n, Gender::Masculine)?),
    };
    if centavos == 0 {
        return Some(reais_clause);
    }

    let centavos_clause = match centavos {
        1 => "um centavo".to_string(),
        n => format!("{} centavos", integer_to_words(n, Gender::Masculine)?),
    };
    if reais == 0 {
        return Some(centavos_clause);
    }
    Some(format!("{reais_clause} e {centavos_clause}"))
}

/// Amount string ("1.500,50") to words ("mil e quinhentos reais e
/// cinquenta centavos").
///
/// Returns an empty string when the amount can't be rendered: unreadable,
/// negative, or too large. An empty result never means zero; zero is
/// "zero".
pub fn amount_to_words(amount: &str) -> String {
    let value = match parse_amount(amount) {
        Ok(value) => value,
        Err(e) => {
            debug!(input = amount, error = %e, "amount not rendered in words");
            return String::new();
        }
    };
    decimal_to_words(value).unwrap_or_else(|| {
        debug!(input = amount, %value, "amount outside the range spelled in words");
        String::new()
    })
}

/// Display form with thousands dots and two decimals: `1.500,50`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(frac_part);
    out
}

/// Filter raw keystrokes into an amount field value.
///
/// Keeps digits and the first comma, with at most two digits after it.
/// Everything else is dropped, so the result always parses (or is empty).
pub fn sanitize_amount_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut decimals: Option<usize> = None;
    for ch in raw.chars() {
        match (ch, decimals) {
            (',', None) => {
                decimals = Some(0);
                out.push(',');
            }
            ('0'..='9', None) => out.push(ch),
            ('0'..='9', Some(n)) if n < 2 => {
                decimals = Some(n + 1);
                out.push(ch);
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse ---

    #[test]
    fn parse_plain_and_grouped() {
        assert_eq!(parse_amount("1500,50").unwrap(), dec!(1500.50));
        assert_eq!(parse_amount("1.500,50").unwrap(), dec!(1500.50));
        assert_eq!(parse_amount(" 1 500 ").unwrap(), dec!(1500));
        assert_eq!(parse_amount("0,01").unwrap(), dec!(0.01));
    }

    #[test]
    fn parse_partial_forms() {
        assert_eq!(parse_amount(",5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount("12,").unwrap(), dec!(12));
        assert_eq!(parse_amount("+3").unwrap(), dec!(3));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount(" . "), Err(AmountError::Empty));
        assert!(matches!(parse_amount("abc"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_amount("1,2,3"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_amount(","), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_amount("-5"), Err(AmountError::Negative(_))));
        assert!(matches!(
            parse_amount("1234567890123456"),
            Err(AmountError::OutOfRange(_))
        ));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_amount("-0,00").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn long_fraction_truncated_after_ninth_digit() {
        assert_eq!(
            parse_amount("1,1234567899999").unwrap(),
            dec!(1.123456789)
        );
    }

    // --- words ---

    #[test]
    fn words_basic() {
        assert_eq!(amount_to_words("0"), "zero");
        assert_eq!(amount_to_words("1"), "um real");
        assert_eq!(amount_to_words("2"), "dois reais");
        assert_eq!(amount_to_words("100"), "cem reais");
        assert_eq!(
            amount_to_words("1500,50"),
            "mil e quinhentos reais e cinquenta centavos"
        );
    }

    #[test]
    fn words_cents_only() {
        assert_eq!(amount_to_words("0,01"), "um centavo");
        assert_eq!(amount_to_words("0,02"), "dois centavos");
        assert_eq!(amount_to_words("0,5"), "cinquenta centavos");
    }

    #[test]
    fn words_one_real_and_cents() {
        assert_eq!(amount_to_words("1,01"), "um real e um centavo");
        assert_eq!(amount_to_words("1,99"), "um real e noventa e nove centavos");
    }

    #[test]
    fn rounding_carries_into_reais() {
        assert_eq!(amount_to_words("10,995"), "onze reais");
        assert_eq!(amount_to_words("0,999"), "um real");
        assert_eq!(amount_to_words("0,994"), "noventa e nove centavos");
    }

    #[test]
    fn rounding_half_up() {
        assert_eq!(amount_to_words("0,005"), "um centavo");
        assert_eq!(amount_to_words("0,004"), "zero");
        assert_eq!(amount_to_words("1,125"), "um real e treze centavos");
    }

    #[test]
    fn words_invalid_is_empty() {
        assert_eq!(amount_to_words(""), "");
        assert_eq!(amount_to_words("abc"), "");
        assert_eq!(amount_to_words("-10"), "");
        assert_eq!(amount_to_words("1.000.000.000"), "");
    }

    #[test]
    fn largest_amount() {
        assert_eq!(
            amount_to_words("999.999.999,99"),
            "novecentos e noventa e nove milhões e novecentos e noventa e nove mil e \
             novecentos e noventa e nove reais e noventa e nove centavos"
        );
    }

    #[test]
    fn decimal_negative_is_none() {
        assert_eq!(decimal_to_words(dec!(-1)), None);
        assert_eq!(decimal_to_words(dec!(1_000_000_000)), None);
        assert_eq!(decimal_to_words(dec!(999999999.995)), None);
    }

    // --- display ---

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_amount(dec!(0)), "0,00");
        assert_eq!(format_amount(dec!(12.5)), "12,50");
        assert_eq!(format_amount(dec!(999.99)), "999,99");
        assert_eq!(format_amount(dec!(1500.50)), "1.500,50");
        assert_eq!(format_amount(dec!(1234567.891)), "1.234.567,89");
        assert_eq!(format_amount(dec!(-1000)), "-1.000,00");
    }

    #[test]
    fn format_then_parse() {
        let value = dec!(98765.43);
        assert_eq!(parse_amount(&format_amount(value)).unwrap(), value);
    }

    // --- input filter ---

    #[test]
    fn sanitize_keeps_digits_and_one_comma() {
        assert_eq!(sanitize_amount_input("R$ 1.500,50"), "1500,50");
        assert_eq!(sanitize_amount_input("12,3456"), "12,34");
        assert_eq!(sanitize_amount_input("1,2,3"), "1,23");
        assert_eq!(sanitize_amount_input(",5"), ",5");
        assert_eq!(sanitize_amount_input("abc"), "");
    }
}

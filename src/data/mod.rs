//! Dates in Brazilian notation.
//!
//! The string functions are lenient on purpose: form fields are passed
//! through untouched (or as an empty string) when they don't look like a
//! date, instead of failing. Required-field checks happen upstream.
//!
//! # Example
//!
//! ```
//! use fatura_br::data::*;
//!
//! assert_eq!(iso_to_brazilian_date("2026-01-15"), "15/01/2026");
//! assert_eq!(month_year_label("2026-01-15"), "janeiro/2026");
//! assert_eq!(month_abbrev("2026-01-15"), "jan");
//!
//! assert_eq!(iso_to_brazilian_date("amanhã"), "amanhã");
//! ```

mod months;

use chrono::{Datelike, NaiveDate};

pub use months::{month_abbreviation, month_name};

/// Reorder an ISO date ("2026-1-5" or "2026-01-05") into `DD/MM/YYYY`.
///
/// Day and month are zero-padded to two digits. Input that doesn't have
/// exactly three `-` or `/` separated parts is returned unchanged; blank
/// input gives an empty string.
pub fn iso_to_brazilian_date(date: &str) -> String {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match components(trimmed).as_slice() {
        [year, month, day] if !year.is_empty() && !month.is_empty() && !day.is_empty() => {
            format!("{day:0>2}/{month:0>2}/{year}")
        }
        _ => date.to_string(),
    }
}

/// Reference month of a date as "<mês>/<ano>" ("janeiro/2026").
///
/// Accepts `YYYY-MM-DD` as well as `DD/MM/YYYY`. Empty when the month is
/// missing or outside 1..=12.
pub fn month_year_label(date: &str) -> String {
    let parts = components(date.trim());
    let (Some(month), Some(year)) = (parse_month(&parts), year_component(&parts)) else {
        return String::new();
    };
    match month_name(month) {
        Some(name) => format!("{name}/{year}"),
        None => String::new(),
    }
}

/// Three-letter month abbreviation of a date ("jan"), as used in file names.
///
/// Accepts `YYYY-MM-DD` as well as `DD/MM/YYYY`. Empty when the month is
/// missing or outside 1..=12.
pub fn month_abbrev(date: &str) -> String {
    let parts = components(date.trim());
    parse_month(&parts)
        .and_then(month_abbreviation)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Format a calendar date as `DD/MM/YYYY`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "<mês>/<ano>" for a calendar date.
pub fn reference_month(date: NaiveDate) -> String {
    // month() is always 1..=12
    let name = month_name(date.month()).unwrap_or_default();
    format!("{name}/{}", date.year())
}

fn components(date: &str) -> Vec<&str> {
    if date.is_empty() {
        return Vec::new();
    }
    date.split(['-', '/']).collect()
}

/// Month from the second component, leading digits only.
fn parse_month(parts: &[&str]) -> Option<u32> {
    let raw = parts.get(1)?.trim();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Year is the first component, or the last one when the date is written
/// day-first (`DD/MM/YYYY`).
fn year_component<'a>(parts: &[&'a str]) -> Option<&'a str> {
    match parts {
        [day, _, year] if day.len() <= 2 && year.len() == 4 => Some(*year),
        [first, _, ..] if !first.is_empty() => Some(*first),
        _ => None,
    }
}

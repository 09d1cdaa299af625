#![cfg(feature = "data")]

use chrono::NaiveDate;
use fatura_br::data::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn documented_examples() {
    assert_eq!(iso_to_brazilian_date("2026-01-15"), "15/01/2026");
    assert_eq!(month_abbrev("2026-01-15"), "jan");
    assert_eq!(month_year_label("2026-01-15"), "janeiro/2026");
}

#[test]
fn every_month() {
    let expected = [
        ("janeiro", "jan"),
        ("fevereiro", "fev"),
        ("março", "mar"),
        ("abril", "abr"),
        ("maio", "mai"),
        ("junho", "jun"),
        ("julho", "jul"),
        ("agosto", "ago"),
        ("setembro", "set"),
        ("outubro", "out"),
        ("novembro", "nov"),
        ("dezembro", "dez"),
    ];
    for (i, (name, abbrev)) in expected.iter().enumerate() {
        let iso = format!("2026-{:02}-01", i + 1);
        assert_eq!(month_year_label(&iso), format!("{name}/2026"));
        assert_eq!(month_abbrev(&iso), *abbrev);
    }
}

#[test]
fn lenient_pass_through() {
    assert_eq!(iso_to_brazilian_date("sem data"), "sem data");
    assert_eq!(iso_to_brazilian_date("2026-01"), "2026-01");
    assert_eq!(month_year_label("sem data"), "");
    assert_eq!(month_abbrev("2026-99-01"), "");
}

#[test]
fn month_functions_accept_brazilian_shape() {
    assert_eq!(month_abbrev("15/01/2026"), "jan");
    assert_eq!(month_year_label("31/12/2025"), "dezembro/2025");
}

#[test]
fn idempotent_inputs_give_identical_outputs() {
    for input in ["2026-01-15", "15/01/2026", "", "x"] {
        assert_eq!(iso_to_brazilian_date(input), iso_to_brazilian_date(input));
        assert_eq!(month_year_label(input), month_year_label(input));
    }
}

#[test]
fn typed_dates() {
    assert_eq!(format_date_br(date(2026, 2, 3)), "03/02/2026");
    assert_eq!(reference_month(date(2026, 3, 31)), "março/2026");
    assert_eq!(month_name(5), Some("maio"));
    assert_eq!(month_abbreviation(13), None);
}

#[test]
fn every_day_of_a_leap_year_agrees_with_chrono() {
    let mut day = date(2024, 1, 1);
    while day.format("%Y").to_string() == "2024" {
        let iso = day.to_string();
        assert_eq!(iso_to_brazilian_date(&iso), format_date_br(day), "{iso}");
        assert_eq!(month_year_label(&iso), reference_month(day), "{iso}");
        day = day.succ_opt().unwrap();
    }
}

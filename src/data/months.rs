//! Portuguese month names.

static MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

static MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Lower-case month name for `month` in 1..=12 ("março").
pub fn month_name(month: u32) -> Option<&'static str> {
    index(month).map(|i| MONTH_NAMES[i])
}

/// Three-letter lower-case abbreviation for `month` in 1..=12 ("mar").
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    index(month).map(|i| MONTH_ABBREVIATIONS[i])
}

fn index(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}

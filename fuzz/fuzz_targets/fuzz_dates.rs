#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = fatura_br::data::iso_to_brazilian_date(s);
        let _ = fatura_br::data::month_year_label(s);
        let _ = fatura_br::data::month_abbrev(s);
    }
});

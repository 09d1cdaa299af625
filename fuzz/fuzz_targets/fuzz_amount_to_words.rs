#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Unreadable amounts give "", never a panic.
        let words = fatura_br::extenso::amount_to_words(s);
        if let Ok(value) = fatura_br::extenso::parse_amount(s) {
            let _ = fatura_br::extenso::format_amount(value);
            assert_eq!(words.is_empty(), fatura_br::extenso::decimal_to_words(value).is_none());
        }
        let filtered = fatura_br::extenso::sanitize_amount_input(s);
        let _ = fatura_br::extenso::amount_to_words(&filtered);
    }
});

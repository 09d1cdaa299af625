#![no_main]

use fatura_br::documento::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for kind in [DocumentKind::Cpf, DocumentKind::Cnpj] {
            let masked = format_document(s, kind);
            assert_eq!(format_document(&masked, kind), masked);
            assert_eq!(validate_document(s, kind), check_document(s, kind).is_ok());
            let _ = check_digits(s, kind);
        }
    }
});

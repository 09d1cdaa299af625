#![no_main]

use fatura_br::fatura::{Fatura, FaturaPayload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → validate → merge must not panic at any step.
        if let Ok(payload) = FaturaPayload::from_json(s) {
            let fatura = match Fatura::from_payload(payload.clone()) {
                Ok(fatura) => fatura,
                Err(_) => Fatura::unchecked(payload.clone(), payload.document_kind()),
            };
            let _ = fatura.merge_fields();
            let _ = fatura.attachment_filename();
        }
    }
});

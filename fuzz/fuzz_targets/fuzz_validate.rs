#![no_main]

use cpfcnpj::{Cnpj, Cpf, Document, TaxId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = Cpf::new_valid(s);
        let _ = Cnpj::new_valid(s);
        let _ = Document::parse(s);
    }
});

#![no_main]

use cpfcnpj::{Cnpj, Cpf, TaxId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let cpf = Cpf::new(s);
        if let Ok(formatted) = cpf.formatted() {
            // A punctuated value must unformat to the same digits as the input.
            assert_eq!(formatted.unformatted().ok(), cpf.unformatted().ok());
        }

        let mut cnpj = Cnpj::new(s);
        if cnpj.format().is_err() {
            assert_eq!(cnpj.as_str(), s);
        }
    }
});

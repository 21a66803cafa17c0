//! Check digit verification for both document kinds.

use super::checksum::check_digit;
use super::digits::{is_repeated, unformat};
use super::error::DocumentError;
use super::kind::DocumentKind;

/// Whether `value` is a structurally valid `kind` number with matching
/// check digits. Accepts both plain and punctuated input.
///
/// Numbers made of a single repeated digit (e.g. `"111.111.111-11"`) are
/// rejected even though their check digits add up; the Receita Federal
/// treats them as invalid.
pub fn is_valid(value: &str, kind: DocumentKind) -> bool {
    let layout = kind.layout();
    if value.is_empty() || (value.len() != layout.size && value.len() != layout.formatted_size) {
        return false;
    }

    let Ok(plain) = unformat(value, kind) else {
        return false;
    };

    if is_repeated(&plain) {
        return false;
    }

    let base = &plain[..layout.size - 2];
    let first = check_digit(base, layout.weights.0);
    let second = check_digit(&plain[..layout.size - 1], layout.weights.1);

    plain == format!("{base}{first}{second}")
}

impl DocumentKind {
    /// Compute the two check digits for `base`, which must be the plain
    /// number without its last two digits (9 digits for CPF, 12 for CNPJ).
    pub fn check_digits(self, base: &str) -> Result<(char, char), DocumentError> {
        let layout = self.layout();
        if base.len() != layout.size - 2 || !base.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DocumentError::Format { kind: self });
        }

        let first = check_digit(base, layout.weights.0);
        let mut extended = String::with_capacity(layout.size - 1);
        extended.push_str(base);
        extended.push(first);
        let second = check_digit(&extended, layout.weights.1);
        Ok((first, second))
    }

    /// Append the check digits to `base`, returning the full plain number.
    ///
    /// ```
    /// use cpfcnpj::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::Cpf.complete("111444777").unwrap(), "11144477735");
    /// assert_eq!(DocumentKind::Cnpj.complete("000000000001").unwrap(), "00000000000191");
    /// ```
    pub fn complete(self, base: &str) -> Result<String, DocumentError> {
        let (first, second) = self.check_digits(base)?;
        Ok(format!("{base}{first}{second}"))
    }
}

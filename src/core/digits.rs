//! Digit extraction and the cheap shape pre-filter.

use super::error::DocumentError;
use super::kind::DocumentKind;

/// Strip every non-ASCII-digit character from `value`.
///
/// Fails with [`DocumentError::Format`] when the number of remaining digits
/// differs from the plain length of `kind`.
pub fn unformat(value: &str, kind: DocumentKind) -> Result<String, DocumentError> {
    let plain: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if plain.len() != kind.plain_len() {
        return Err(DocumentError::Format { kind });
    }
    Ok(plain)
}

/// Whether `value` looks like a `kind` number: it either matches the
/// punctuated pattern or has exactly the plain length in bytes.
///
/// Characters of a plain-length input are not inspected here; a value such
/// as `"1114447773a"` passes and is rejected later by [`unformat`].
pub fn matches_shape(value: &str, kind: DocumentKind) -> bool {
    kind.pattern().is_match(value) || value.len() == kind.plain_len()
}

/// True when every byte of `value` is the same. Empty input counts as repeated.
pub(crate) fn is_repeated(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.windows(2).all(|w| w[0] == w[1])
}

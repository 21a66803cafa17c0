//! Conversion between the plain and punctuated display forms.

use std::borrow::Cow;

use super::digits::unformat;
use super::error::DocumentError;
use super::kind::DocumentKind;

/// Punctuate `value` as a `kind` number.
///
/// Input that already matches the punctuated pattern is returned borrowed
/// and unchanged. Anything else must contain exactly the plain number of
/// ASCII digits; check digits are not verified.
pub fn format(value: &str, kind: DocumentKind) -> Result<Cow<'_, str>, DocumentError> {
    if kind.pattern().is_match(value) {
        return Ok(Cow::Borrowed(value));
    }

    let plain = unformat(value, kind)?;
    let layout = kind.layout();
    let mut out = String::with_capacity(layout.formatted_size);
    let mut start = 0;
    for (i, len) in layout.groups.iter().enumerate() {
        out.push_str(&plain[start..start + len]);
        if let Some(sep) = layout.separators.get(i) {
            out.push(*sep);
        }
        start += len;
    }
    Ok(Cow::Owned(out))
}

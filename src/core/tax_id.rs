use super::digits::{matches_shape, unformat};
use super::error::DocumentError;
use super::format::format;
use super::kind::DocumentKind;
use super::validation::is_valid;

/// Operations shared by every document number type.
///
/// Implementors only provide the raw wrapping; shape checks, check digit
/// verification and formatting come from the shared core, parameterised by
/// [`TaxId::KIND`].
pub trait TaxId: Sized {
    /// Which document this type represents.
    const KIND: DocumentKind;

    /// Wrap `value` without any validation.
    fn wrap(value: String) -> Self;

    /// The held value, exactly as stored.
    fn as_str(&self) -> &str;

    /// Build a value that is guaranteed to be a well-formed plain or
    /// punctuated number with correct check digits.
    ///
    /// Fails with [`DocumentError::Format`] when the input has neither shape
    /// and with [`DocumentError::Checksum`] when the check digits are wrong.
    fn new_valid(value: impl Into<String>) -> Result<Self, DocumentError> {
        let value = value.into();
        if !matches_shape(&value, Self::KIND) {
            return Err(DocumentError::Format { kind: Self::KIND });
        }
        if !is_valid(&value, Self::KIND) {
            return Err(DocumentError::Checksum { kind: Self::KIND });
        }
        Ok(Self::wrap(value))
    }

    /// Whether the held value is a valid number of this kind.
    fn is_valid(&self) -> bool {
        is_valid(self.as_str(), Self::KIND)
    }

    /// A punctuated copy of this value.
    fn formatted(&self) -> Result<Self, DocumentError> {
        Ok(Self::wrap(format(self.as_str(), Self::KIND)?.into_owned()))
    }

    /// A digits-only copy of this value.
    fn unformatted(&self) -> Result<Self, DocumentError> {
        Ok(Self::wrap(unformat(self.as_str(), Self::KIND)?))
    }

    /// Punctuate the held value in place. On error the value is unchanged.
    fn format(&mut self) -> Result<(), DocumentError> {
        *self = self.formatted()?;
        Ok(())
    }

    /// Strip punctuation from the held value in place. On error the value
    /// is unchanged.
    fn unformat(&mut self) -> Result<(), DocumentError> {
        *self = self.unformatted()?;
        Ok(())
    }
}

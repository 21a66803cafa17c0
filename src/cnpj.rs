//! Cadastro Nacional da Pessoa Jurídica, the legal-entity taxpayer registry
//! kept by the Receita Federal.

use std::fmt;
use std::str::FromStr;

use crate::core::{DocumentError, DocumentKind, TaxId};

/// A CNPJ number, plain (`"00000000000191"`) or punctuated (`"00.000.000/0001-91"`).
///
/// [`Cnpj::new`] and the `From` conversions wrap any string without checks;
/// use [`TaxId::new_valid`] (or `str::parse`) when the value must be valid.
///
/// ```
/// use cpfcnpj::{Cnpj, TaxId};
///
/// let mut cnpj = Cnpj::new_valid("00000000000191")?;
/// cnpj.format()?;
/// assert_eq!(cnpj.as_str(), "00.000.000/0001-91");
/// # Ok::<(), cpfcnpj::DocumentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Wrap `value` without validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Consume the CNPJ and return the held string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TaxId for Cnpj {
    const KIND: DocumentKind = DocumentKind::Cnpj;

    fn wrap(value: String) -> Self {
        Self(value)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_valid(s)
    }
}

impl From<String> for Cnpj {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Cnpj {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cnpj {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cnpj {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new_valid(value).map_err(serde::de::Error::custom)
    }
}

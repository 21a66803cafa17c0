//! Cadastro de Pessoas Físicas, the individual taxpayer registry kept by
//! the Receita Federal.

use std::fmt;
use std::str::FromStr;

use crate::core::{DocumentError, DocumentKind, TaxId};

/// A CPF number, plain (`"11144477735"`) or punctuated (`"111.444.777-35"`).
///
/// [`Cpf::new`] and the `From` conversions wrap any string without checks;
/// use [`TaxId::new_valid`] (or `str::parse`) when the value must be valid.
///
/// ```
/// use cpfcnpj::{Cpf, TaxId};
///
/// let mut cpf = Cpf::new_valid("11144477735")?;
/// cpf.format()?;
/// assert_eq!(cpf.as_str(), "111.444.777-35");
/// # Ok::<(), cpfcnpj::DocumentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Wrap `value` without validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Consume the CPF and return the held string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TaxId for Cpf {
    const KIND: DocumentKind = DocumentKind::Cpf;

    fn wrap(value: String) -> Self {
        Self(value)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_valid(s)
    }
}

impl From<String> for Cpf {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Cpf {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cpf {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cpf {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new_valid(value).map_err(serde::de::Error::custom)
    }
}

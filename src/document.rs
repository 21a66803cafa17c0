//! Either document, with the kind detected from the input.

use std::fmt;
use std::str::FromStr;

use crate::cnpj::Cnpj;
use crate::core::{DocumentError, DocumentKind, TaxId, matches_shape};
use crate::cpf::Cpf;

/// A validated CPF or CNPJ.
///
/// ```
/// use cpfcnpj::{Document, DocumentKind};
///
/// let doc = Document::parse("00.000.000/0001-91")?;
/// assert_eq!(doc.kind(), DocumentKind::Cnpj);
/// assert_eq!(doc.unformatted()?.as_str(), "00000000000191");
/// # Ok::<(), cpfcnpj::DocumentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Detect the kind of `value` from its shape and validate it.
    ///
    /// The CPF shape is tried first, so a 14-byte input is a CPF only when
    /// it matches the punctuated CPF pattern and a CNPJ otherwise. Input
    /// fitting neither shape fails with a format error for CPF when it holds
    /// at most 11 digits and for CNPJ otherwise.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        if matches_shape(value, DocumentKind::Cpf) {
            return Cpf::new_valid(value).map(Document::Cpf);
        }
        if matches_shape(value, DocumentKind::Cnpj) {
            return Cnpj::new_valid(value).map(Document::Cnpj);
        }

        let digits = value.bytes().filter(u8::is_ascii_digit).count();
        let kind = if digits <= DocumentKind::Cpf.plain_len() {
            DocumentKind::Cpf
        } else {
            DocumentKind::Cnpj
        };
        Err(DocumentError::Format { kind })
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Cpf(_) => DocumentKind::Cpf,
            Document::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Document::Cpf(cpf) => cpf.as_str(),
            Document::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Document::Cpf(cpf) => cpf.is_valid(),
            Document::Cnpj(cnpj) => cnpj.is_valid(),
        }
    }

    /// A punctuated copy of this document.
    pub fn formatted(&self) -> Result<Self, DocumentError> {
        match self {
            Document::Cpf(cpf) => cpf.formatted().map(Document::Cpf),
            Document::Cnpj(cnpj) => cnpj.formatted().map(Document::Cnpj),
        }
    }

    /// A digits-only copy of this document.
    pub fn unformatted(&self) -> Result<Self, DocumentError> {
        match self {
            Document::Cpf(cpf) => cpf.unformatted().map(Document::Cpf),
            Document::Cnpj(cnpj) => cnpj.unformatted().map(Document::Cnpj),
        }
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Document::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Document::Cnpj(cnpj)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_cpf() {
        let doc = Document::parse("11144477735").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);
        let doc = Document::parse("111.444.777-35").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);
    }

    #[test]
    fn fourteen_digits_are_cnpj() {
        let doc = Document::parse("00000000000191").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cnpj);
    }

    #[test]
    fn error_kind_follows_digit_count() {
        assert_eq!(
            Document::parse("123").unwrap_err().kind(),
            DocumentKind::Cpf
        );
        assert_eq!(
            Document::parse("123456789012345").unwrap_err().kind(),
            DocumentKind::Cnpj
        );
    }

    #[test]
    fn checksum_error_keeps_detected_kind() {
        let err = Document::parse("00.000.000/0001-92").unwrap_err();
        assert_eq!(
            err,
            DocumentError::Checksum {
                kind: DocumentKind::Cnpj
            }
        );
    }
}

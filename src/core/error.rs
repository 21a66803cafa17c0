use thiserror::Error;

use super::kind::DocumentKind;

/// Errors returned when building or reshaping a CPF or CNPJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Input is neither the plain digit form nor the punctuated form.
    #[error(
        "{kind} must have {} digits ({} with punctuation)",
        .kind.plain_len(),
        .kind.formatted_len()
    )]
    Format { kind: DocumentKind },

    /// Input is well formed but its check digits do not match.
    #[error("invalid {kind}")]
    Checksum { kind: DocumentKind },
}

impl DocumentError {
    /// The document kind the failing operation was working on.
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentError::Format { kind } | DocumentError::Checksum { kind } => *kind,
        }
    }

    /// Whether the input was structurally rejected.
    pub fn is_format(&self) -> bool {
        matches!(self, DocumentError::Format { .. })
    }

    /// Whether the input failed check digit verification.
    pub fn is_checksum(&self) -> bool {
        matches!(self, DocumentError::Checksum { .. })
    }
}

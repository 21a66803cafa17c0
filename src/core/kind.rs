use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("Invalid CPF regex pattern")
});

static CNPJ_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$")
        .expect("Invalid CNPJ regex pattern")
});

/// Per-kind constants driving the shared checksum and formatting code.
#[derive(Debug)]
pub(crate) struct Layout {
    /// Number of digits in the plain form.
    pub size: usize,
    /// Length of the punctuated form.
    pub formatted_size: usize,
    /// Starting weights for the first and second check digit.
    pub weights: (u32, u32),
    /// Digit group sizes of the punctuated form.
    pub groups: &'static [usize],
    /// Separator placed after each group except the last.
    pub separators: &'static [char],
}

static CPF_LAYOUT: Layout = Layout {
    size: 11,
    formatted_size: 14,
    weights: (10, 11),
    groups: &[3, 3, 3, 2],
    separators: &['.', '.', '-'],
};

// Weights for CNPJ cycle 5..2 then 9..2.
static CNPJ_LAYOUT: Layout = Layout {
    size: 14,
    formatted_size: 18,
    weights: (5, 6),
    groups: &[2, 3, 3, 4, 2],
    separators: &['.', '.', '/', '-'],
};

/// The two supported Brazilian registry documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas: individual taxpayer, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: legal entity, 14 digits.
    Cnpj,
}

impl DocumentKind {
    pub(crate) fn layout(self) -> &'static Layout {
        match self {
            DocumentKind::Cpf => &CPF_LAYOUT,
            DocumentKind::Cnpj => &CNPJ_LAYOUT,
        }
    }

    /// Anchored pattern of the punctuated form.
    pub(crate) fn pattern(self) -> &'static Regex {
        match self {
            DocumentKind::Cpf => &*CPF_PATTERN,
            DocumentKind::Cnpj => &*CNPJ_PATTERN,
        }
    }

    /// Number of digits in the plain form (11 or 14).
    pub fn plain_len(self) -> usize {
        self.layout().size
    }

    /// Length of the punctuated form (14 or 18).
    pub fn formatted_len(self) -> usize {
        self.layout().formatted_size
    }

    /// Short uppercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

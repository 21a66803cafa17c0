//! # cpfcnpj
//!
//! Validation and formatting of the two Brazilian taxpayer registry numbers:
//! CPF (individuals, 11 digits) and CNPJ (legal entities, 14 digits).
//!
//! Both accept a plain (`"11144477735"`) or punctuated (`"111.444.777-35"`)
//! form. Validation checks the shape, rejects single-digit repetitions and
//! verifies the two mod-11 check digits. It says nothing about whether a
//! number was ever issued.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpfcnpj::*;
//!
//! let mut cnpj = Cnpj::new_valid("00000000000191").unwrap();
//! cnpj.format().unwrap();
//! assert_eq!(cnpj.as_str(), "00.000.000/0001-91");
//!
//! assert!(Cpf::new("111.444.777-35").is_valid());
//! assert!(Cpf::new_valid("123").unwrap_err().is_format());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cpf` (default) | The [`Cpf`] type |
//! | `cnpj` (default) | The [`Cnpj`] type |
//! | `serde` (default) | Validating `Serialize`/`Deserialize` impls |
//! | `all` | Everything |
//!
//! [`Document`] needs both `cpf` and `cnpj`.

pub mod core;

#[cfg(feature = "cpf")]
mod cpf;

#[cfg(feature = "cnpj")]
mod cnpj;

#[cfg(all(feature = "cpf", feature = "cnpj"))]
mod document;

pub use crate::core::*;

#[cfg(feature = "cnpj")]
pub use crate::cnpj::Cnpj;

#[cfg(feature = "cpf")]
pub use crate::cpf::Cpf;

#[cfg(all(feature = "cpf", feature = "cnpj"))]
pub use crate::document::Document;

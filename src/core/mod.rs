//! Shared checksum, validation and formatting engine.
//!
//! Both documents run through the same code; a per-kind layout table
//! supplies lengths, punctuation groups and check digit weights.

mod checksum;
mod digits;
mod error;
mod format;
mod kind;
mod tax_id;
mod validation;

pub use checksum::check_digit;
pub use digits::{matches_shape, unformat};
pub use error::DocumentError;
pub use format::format;
pub use kind::DocumentKind;
pub use tax_id::TaxId;
pub use validation::is_valid;

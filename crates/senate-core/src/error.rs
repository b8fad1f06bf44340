//! # Error Types
//!
//! Errors raised while building a roster or interpreting filter input.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Missing optional member fields and empty filter results are not errors
//! and never surface here.

use thiserror::Error;

/// Top-level error type for the senate roster core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SenateError {
    /// A value failed domain validation (unknown party, bad state code, ...).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Two records share the same identifier.
    #[error("duplicate member identifier: {0}")]
    DuplicateMember(String),
}

/// A single value rejected by a domain constructor or parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The filter field name is not one of the closed set of fields.
    #[error("unknown filter field: {0:?}")]
    UnknownField(String),

    /// The value does not belong to the field's domain.
    #[error("invalid {field} value: {value:?}")]
    InvalidValue {
        /// Field the value was supplied for.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A required identifier was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl ValidationError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

//! Error types for value conversions.
//!
//! The accessor operations themselves never fail; these errors only arise at
//! the edges where foreign data is turned into a [`Value`](super::Value) or a
//! `Value` is converted into a concrete Rust type.

use std::fmt;

use thiserror::Error;

/// Structured error types for value conversions.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    /// Serializing a Rust value into a `Value` failed
    #[error("Value serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// A map key could not be rendered as text
    #[error("Invalid map key: expected text or integer, found {actual}")]
    InvalidMapKey { actual: String },

    /// Type mismatch when converting out of a `Value`
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ValueError {
    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            ValueError::SerializationFailed { .. } | ValueError::InvalidMapKey { .. }
        )
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

impl serde::ser::Error for ValueError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ValueError::SerializationFailed {
            reason: msg.to_string(),
        }
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}

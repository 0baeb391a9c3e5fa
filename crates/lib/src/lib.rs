//!
//! Pathwise: path-based access to nested heterogeneous data.
//! This library reads, writes, deletes, flattens and transforms trees of maps,
//! lists, tuples and typed records without callers knowing in advance which
//! shape each node has or how a map stores its keys.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A closed sum type over scalar leaves and the four container shapes: maps, lists, tuples and typed records.
//! * **Keys (`value::Key`)**: Map keys are either symbols or text. Both denote the same logical identifier, and lookups resolve across representations.
//! * **Symbol tables (`value::SymbolTable`)**: A read-only set of known symbols, installed once at start-up. Lookups never grow it.
//! * **Paths (`access::Path`)**: Ordered field and index segments, parsed from dotted text or built with the [`path!`] macro.
//! * **Accessor (`access::Accessor`)**: Single-level and deep get/put/delete plus sparse projections (`deep_get_many`).
//! * **Flattening (`flatten`)**: One entry per leaf under composite keys, and the inverse.
//! * **Normalization (`normalize`)**: Typed records to plain maps, with per-type leaf transforms.
//! * **Transforms (`transform`)**: Shape-preserving `map_all` and pruning with `delete_empty`.

pub mod access;
pub mod constants;
pub mod flatten;
pub mod normalize;
pub mod presence;
pub mod transform;
pub mod value;

pub use access::{
    Accessor, Path, PathSegment, deep_delete, deep_get, deep_get_many, deep_get_or, deep_put, delete, get,
    get_or, put,
};
pub use flatten::{FlattenOptions, flatten, unflatten};
pub use normalize::{Transforms, from_record};
pub use presence::Presence;
pub use transform::{delete_empty, map_all};
/// Re-export the `Value` type for easier access.
pub use value::Value;

/// Result type used throughout the pathwise library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathwise library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured value conversion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from parsing or writing JSON.
    pub fn is_json_error(&self) -> bool {
        matches!(self, Error::Json(_))
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_serialization_error(),
            Error::Json(_) => true,
            _ => false,
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }
}

//! Cross-cutting error types for sysapi.
//!
//! Registry lookups fail with `SchemaError` in `sysapi-schema`; this module
//! only holds errors raised while interpreting core types.

use thiserror::Error;

/// Errors that can be raised by any sysapi crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A category tag did not match any known category.
    #[error("Unknown schema category: {0}")]
    UnknownCategory(String),
}

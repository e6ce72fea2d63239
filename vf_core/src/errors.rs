//! # Error Types
//!
//! Structured error types for vf_core. Each variant carries enough context
//! to tell the user exactly which input or operation went wrong, and all
//! variants serialize cleanly for the JSON output mode.
//!
//! ## Example
//!
//! ```rust
//! use vf_core::errors::{CalcError, CalcResult};
//!
//! fn validate_age(age: u32) -> CalcResult<()> {
//!     if age == 0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "age".to_string(),
//!             value: age.to_string(),
//!             reason: "Age must be at least 1".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vf_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and storage operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling front ends to report field-level problems.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong shape, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Data store error (open, insert, commit)
    #[error("Storage error: {operation} - {reason}")]
    StorageError { operation: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a StorageError
    pub fn storage_error(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::StorageError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::StorageError { .. } => "STORAGE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

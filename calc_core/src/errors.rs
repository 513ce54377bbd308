//! # Error Types
//!
//! Structured error types for calc_core. Two families live here:
//!
//! - **State errors** (`DivisionUndefined`, `NonFiniteResult`) are never
//!   returned from an operation. The calculator records them in its state,
//!   shows the `"Error"` sentinel and keeps the error for inspection via
//!   [`Calculator::last_error`](crate::calculator::Calculator::last_error).
//! - **Input errors** (`InvalidInput`, `FileError`, `SerializationError`) are
//!   returned to the host, which handed us something we cannot interpret.
//!   State is left untouched.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_digit(c: char) -> CalcResult<u32> {
//!     c.to_digit(10)
//!         .ok_or_else(|| CalcError::invalid_input("digit", c.to_string(), "Expected 0-9"))
//! }
//!
//! assert!(parse_digit('7').is_ok());
//! assert_eq!(parse_digit('x').unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::operator::Operator;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Divide or modulus with a second operand of exactly zero
    #[error("Division undefined: {dividend} {} 0", .operator.symbol())]
    DivisionUndefined { operator: Operator, dividend: f64 },

    /// Arithmetic overflowed to infinity or produced NaN
    #[error("Result is not a finite number: {expression}")]
    NonFiniteResult { expression: String },

    /// The host passed a digit, symbol or key we do not recognise
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DivisionUndefined error
    pub fn division_undefined(operator: Operator, dividend: f64) -> Self {
        CalcError::DivisionUndefined { operator, dividend }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(expression: impl Into<String>) -> Self {
        CalcError::NonFiniteResult {
            expression: expression.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error puts the calculator into its `"Error"` display state
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            CalcError::DivisionUndefined { .. } | CalcError::NonFiniteResult { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionUndefined { .. } => "DIVISION_UNDEFINED",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

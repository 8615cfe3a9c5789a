//! # Error Types
//!
//! Structured error types for rc_core. No condition in this domain is
//! globally fatal: a failed check is a normal `pass = false` outcome, and
//! a section that cannot be computed at all reports a structured error
//! without stopping the rest of the batch.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(b_mm: f64) -> CalcResult<()> {
//!     if b_mm <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "b_mm",
//!             b_mm.to_string(),
//!             "Section width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for section check operations.
///
/// Only mathematically undefined inputs produce errors. "Demand exceeds
/// capacity" is never an error; it shows up as a failed check flag in
/// the result record.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A geometric or material input is non-positive or inconsistent
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// The flexural quadratic has no positive real root: the section
    /// cannot resist the demand under the singly-reinforced model
    #[error("No solution: {calculation} - {reason}")]
    NoSolution {
        calculation: String,
        reason: String,
    },

    /// A formula would divide by zero (e.g. tensile strain with c = 0)
    #[error("Division undefined in {calculation}: {reason}")]
    DivisionUndefined {
        calculation: String,
        reason: String,
    },

    /// A required field is missing from an input record
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoSolution error
    pub fn no_solution(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NoSolution {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionUndefined error
    pub fn division_undefined(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DivisionUndefined {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::NoSolution { .. } => "NO_SOLUTION",
            CalcError::DivisionUndefined { .. } => "DIVISION_UNDEFINED",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("d_mm", "-250", "Effective depth must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::no_solution("required_steel_area", "discriminant < 0").error_code(),
            "NO_SOLUTION"
        );
        assert_eq!(
            CalcError::division_undefined("tensile_strain", "c = 0").error_code(),
            "DIVISION_UNDEFINED"
        );
        assert_eq!(CalcError::missing_field("h_mm").error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::file_locked("a.rcd", "someone", "now").is_recoverable());
        assert!(!CalcError::missing_field("b_mm").is_recoverable());
    }
}

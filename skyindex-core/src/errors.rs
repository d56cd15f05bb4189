//! Error types for angle construction and conversion.
//!
//! [`AstroError`] covers the two ways building an [`Angle`](crate::Angle) from
//! catalog text can fail: the text is not a decimal number, or the scaled value
//! does not fit the integer representation.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidNumber`](AstroError::InvalidNumber) | Text is not a plain decimal |
//! | [`MathError`](AstroError::MathError) | Scaled value overflows `i64` |
//!
//! ```
//! use skyindex_core::{AstroError, MathErrorKind};
//!
//! let err = AstroError::math_error("Angle::checked_mul", MathErrorKind::Overflow, "too large");
//! assert!(err.to_string().contains("Overflow"));
//! ```

use thiserror::Error;

/// Classification of numerical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Result exceeds the `i64` micro-arcsecond range.
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstroError {
    /// Text could not be read as a decimal number.
    #[error("Invalid number '{input}': {message}")]
    InvalidNumber { input: String, message: String },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`InvalidNumber`](Self::InvalidNumber) error.
    pub fn invalid_number(input: &str, reason: &str) -> Self {
        Self::InvalidNumber {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}

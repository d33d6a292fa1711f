//! Validation error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Every
//! variant carries its fully formatted message, so `to_string()` yields the
//! message verbatim with no prefix.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed message for a value constraint built without options or bounds.
pub const MISSING_ARGUMENT_MESSAGE: &str =
    "args must include either :options, or both: [:first, :last]";

/// Error raised by a failed check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Value is not of the required type, or not a sequence of it.
    #[error("{0}")]
    InvalidType(String),

    /// Value falls outside a bound or inclusive range.
    #[error("{0}")]
    OutOfRange(String),

    /// Value is not one of the allowed options.
    #[error("{0}")]
    OutOfSet(String),

    /// Constraint was built without enough information to check anything.
    #[error("{0}")]
    MissingArgument(String),
}

/// Discriminant of [`Error`], for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidType,
    OutOfRange,
    OutOfSet,
    MissingArgument,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::OutOfSet => "out_of_set",
            ErrorKind::MissingArgument => "missing_argument",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidType(_) => ErrorKind::InvalidType,
            Error::OutOfRange(_) => ErrorKind::OutOfRange,
            Error::OutOfSet(_) => ErrorKind::OutOfSet,
            Error::MissingArgument(_) => ErrorKind::MissingArgument,
        }
    }

    /// The human-readable message, identical to `to_string()`.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidType(msg)
            | Error::OutOfRange(msg)
            | Error::OutOfSet(msg)
            | Error::MissingArgument(msg) => msg,
        }
    }
}

// Convenience constructors
impl Error {
    pub fn invalid_type(msg: impl Into<String>) -> Self {
        Self::InvalidType(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn out_of_set(msg: impl Into<String>) -> Self {
        Self::OutOfSet(msg.into())
    }

    /// The fixed missing-argument error.
    pub fn missing_argument() -> Self {
        Self::MissingArgument(MISSING_ARGUMENT_MESSAGE.to_string())
    }
}

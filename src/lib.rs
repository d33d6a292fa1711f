//! # strongly-typed - parameter validation
//!
//! Precondition checks for function parameters:
//! - Type checks against registered type identifiers (`TypeTag`, `TypeFamily`)
//! - Sequence element type checks
//! - Exact-type membership in a list of types
//! - Ordering against a bound
//! - Membership in an explicit set or inclusive range
//!
//! Each check returns `Ok(true)` or an [`Error`] carrying a message that names
//! the parameter and the constraint it broke:
//!
//! ```
//! use strongly_typed::{validate_value_greater_than, ErrorKind};
//!
//! let err = validate_value_greater_than("retries", &0, &0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(err.to_string(), "retries must be greater than 0");
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use types::{
    Config, Error, ErrorKind, Kind, ObservabilityConfig, Result, TypeFamily, TypeTag,
    ValueConstraint, MISSING_ARGUMENT_MESSAGE,
};
pub use validation::{
    validate_array_of_type, validate_type_equals, validate_type_in, validate_value_greater_than,
    validate_value_in, validate_value_in_parts,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

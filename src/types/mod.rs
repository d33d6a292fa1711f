//! Core types for the validators.
//!
//! This module provides the vocabulary the checks are written in:
//! - **Kinds**: registered type identifiers (`TypeTag`, `TypeFamily`)
//! - **Constraints**: set or range membership (`ValueConstraint`)
//! - **Errors**: validation error types with thiserror derives
//! - **Config**: observability configuration

mod config;
mod constraint;
mod errors;
mod kind;

pub use config::{Config, ObservabilityConfig, LOG_FILTER_ENV, LOG_FORMAT_ENV};
pub use constraint::ValueConstraint;
pub use errors::{Error, ErrorKind, Result, MISSING_ARGUMENT_MESSAGE};
pub use kind::{Kind, TypeFamily, TypeTag};

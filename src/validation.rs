//! Parameter validation checks.
//!
//! Every check takes the parameter's name, its value, and a constraint, and
//! returns `Ok(true)` or an [`Error`] whose message names the parameter and
//! the constraint. Checks hold no state and never mutate their inputs.
//!
//! Type checks take the value as `&dyn Any`. A `Box<dyn Any>` must be
//! dereferenced first (`&*boxed`), otherwise the box itself is checked.
//!
//! ```
//! use strongly_typed::{validate_type_equals, validate_value_in, TypeTag, ValueConstraint};
//!
//! fn add(left: i64, right: i64) -> strongly_typed::Result<i64> {
//!     validate_type_equals("left", &left, &TypeTag::of::<i64>())?;
//!     validate_value_in("right", &right, &ValueConstraint::range(0, 100))?;
//!     Ok(left + right)
//! }
//!
//! assert_eq!(add(2, 3).unwrap(), 5);
//! assert!(add(2, 300).is_err());
//! ```

use std::any::Any;
use std::fmt::{Debug, Display};

use crate::types::{Error, Kind, Result, TypeTag, ValueConstraint};

fn reject(name: &str, err: Error) -> Result<bool> {
    tracing::debug!("validation_failed: param={}, kind={}", name, err.kind());
    Err(err)
}

/// Validate that `value` is-a `kind`.
pub fn validate_type_equals<K>(name: &str, value: &dyn Any, kind: &K) -> Result<bool>
where
    K: Kind + ?Sized,
{
    if kind.admits(value) {
        return Ok(true);
    }
    reject(
        name,
        Error::invalid_type(format!("{} must be a {}", name, kind.name())),
    )
}

/// Validate that `value` is an ordered sequence whose every element is-a `kind`.
///
/// An empty sequence passes.
pub fn validate_array_of_type<K>(name: &str, value: &dyn Any, kind: &K) -> Result<bool>
where
    K: Kind + ?Sized,
{
    let all_admitted = kind
        .elements(value)
        .is_some_and(|items| items.iter().all(|item| kind.admits(*item)));

    if all_admitted {
        return Ok(true);
    }
    reject(
        name,
        Error::invalid_type(format!("{} must be an array of {}s", name, kind.name())),
    )
}

/// Validate that the exact runtime type of `value` is one of `types`.
pub fn validate_type_in(name: &str, value: &dyn Any, types: &[TypeTag]) -> Result<bool> {
    if types.iter().any(|tag| tag.matches(value)) {
        return Ok(true);
    }
    let names: Vec<&str> = types.iter().map(TypeTag::name).collect();
    reject(
        name,
        Error::invalid_type(format!("{} must be one of: {:?}", name, names)),
    )
}

/// Validate that `value > bound`.
pub fn validate_value_greater_than<T, U>(name: &str, value: &T, bound: &U) -> Result<bool>
where
    T: PartialOrd<U> + ?Sized,
    U: Display + ?Sized,
{
    if value > bound {
        return Ok(true);
    }
    reject(
        name,
        Error::out_of_range(format!("{} must be greater than {}", name, bound)),
    )
}

/// Validate that `value` satisfies `constraint`.
pub fn validate_value_in<T>(
    name: &str,
    value: &T,
    constraint: &ValueConstraint<T>,
) -> Result<bool>
where
    T: PartialOrd + Debug + Display,
{
    if constraint.contains(value) {
        return Ok(true);
    }
    let err = match constraint {
        ValueConstraint::Set(options) => Error::out_of_set(format!(
            "{} must have a value equal to one of: {:?} - received: {}",
            name, options, value
        )),
        ValueConstraint::Range { first, last } => Error::out_of_range(format!(
            "{} must have a value in the range: [{}..{}]",
            name, first, last
        )),
    };
    reject(name, err)
}

/// Validate `value` against a constraint given as optional parts.
///
/// Fails with `MissingArgument` before `value` is looked at unless `options`
/// or both bounds are supplied.
pub fn validate_value_in_parts<T>(
    name: &str,
    value: &T,
    options: Option<Vec<T>>,
    first: Option<T>,
    last: Option<T>,
) -> Result<bool>
where
    T: PartialOrd + Debug + Display,
{
    match ValueConstraint::from_parts(options, first, last) {
        Ok(constraint) => validate_value_in(name, value, &constraint),
        Err(err) => reject(name, err),
    }
}

//! Value constraints for membership checks.

use serde::{Deserialize, Serialize};

use super::errors::{Error, Result};

/// What a value must belong to: an explicit set or an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueConstraint<T> {
    /// Value must equal one of the options.
    Set(Vec<T>),
    /// Value must satisfy `first <= value <= last`.
    Range { first: T, last: T },
}

impl<T> ValueConstraint<T> {
    pub fn set(options: impl IntoIterator<Item = T>) -> Self {
        Self::Set(options.into_iter().collect())
    }

    pub fn range(first: T, last: T) -> Self {
        Self::Range { first, last }
    }

    /// Build from optional parts.
    ///
    /// `options` wins when present; otherwise both bounds are required.
    /// Presence is decided by `Some`, so a zero or empty bound still counts.
    pub fn from_parts(
        options: Option<Vec<T>>,
        first: Option<T>,
        last: Option<T>,
    ) -> Result<Self> {
        match (options, first, last) {
            (Some(options), _, _) => Ok(Self::Set(options)),
            (None, Some(first), Some(last)) => Ok(Self::Range { first, last }),
            _ => Err(Error::missing_argument()),
        }
    }
}

impl<T: PartialOrd> ValueConstraint<T> {
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Set(options) => options.iter().any(|option| option == value),
            Self::Range { first, last } => first <= value && value <= last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    #[test]
    fn test_from_parts_prefers_options() {
        let constraint = ValueConstraint::from_parts(Some(vec![1, 2]), Some(0), Some(9)).unwrap();
        assert_eq!(constraint, ValueConstraint::Set(vec![1, 2]));
    }

    #[test]
    fn test_from_parts_zero_bound_is_present() {
        let constraint = ValueConstraint::from_parts(None, Some(0), Some(3)).unwrap();
        assert_eq!(constraint, ValueConstraint::range(0, 3));
        assert!(constraint.contains(&0));
    }

    #[test]
    fn test_from_parts_missing() {
        for parts in [
            (None, None, None),
            (None, Some(1), None),
            (None, None, Some(10)),
        ] {
            let err = ValueConstraint::<i32>::from_parts(parts.0, parts.1, parts.2).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingArgument);
        }
    }

    #[test]
    fn test_inverted_range_admits_nothing() {
        let constraint = ValueConstraint::range(10, 1);
        assert!(!constraint.contains(&1));
        assert!(!constraint.contains(&5));
        assert!(!constraint.contains(&10));
    }

    #[test]
    fn test_set_contains_by_equality() {
        let constraint = ValueConstraint::set(["run", "walk"]);
        assert!(constraint.contains(&"walk"));
        assert!(!constraint.contains(&"swim"));
    }

    #[test]
    fn test_deserialize_tagged() {
        let range: ValueConstraint<u32> =
            serde_json::from_str(r#"{"range":{"first":1,"last":10}}"#).unwrap();
        assert_eq!(range, ValueConstraint::range(1, 10));

        let set: ValueConstraint<String> = serde_json::from_str(r#"{"set":["a","b"]}"#).unwrap();
        assert!(set.contains(&"b".to_string()));
    }
}

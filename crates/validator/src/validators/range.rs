//! Bound and equality validators
//!
//! Arguments arrive as text from the rule chain and are compared with the
//! data value following [`coerce::compare`]: numerically when both sides are
//! numeric-like, by text otherwise. Values that cannot be compared at all
//! (booleans, arrays, objects) fail.

use std::cmp::Ordering;
use std::slice;

use serde_json::Value;

use crate::foundation::{ValidationError, coerce};
use crate::messages;

crate::validator! {
    /// Validates that a value equals the argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatekeep_validator::foundation::Validate;
    /// use gatekeep_validator::validators::equal;
    /// use serde_json::json;
    ///
    /// let validator = equal("42");
    /// assert!(validator.validate(&json!(42)).is_ok());
    /// assert!(validator.validate(&json!("42.0")).is_ok());
    /// assert!(validator.validate(&json!("forty-two")).is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub Equal { expected: String } for Value;
    rule(self, input) { coerce::compare(input, &self.expected) == Some(Ordering::Equal) }
    error(self, input) {
        ValidationError::new(
            "equal",
            messages::render(messages::EQUAL, slice::from_ref(&self.expected)),
        )
        .with_param("arg0", self.expected.clone())
    }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn equal(expected: impl Into<String>);
}

crate::validator! {
    /// Validates that a value is at least the argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatekeep_validator::foundation::Validate;
    /// use gatekeep_validator::validators::min;
    /// use serde_json::json;
    ///
    /// let validator = min("18");
    /// assert!(validator.validate(&json!(18)).is_ok());
    /// assert!(validator.validate(&json!("9")).is_err()); // numeric, not lexical
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub Min { bound: String } for Value;
    rule(self, input) {
        matches!(
            coerce::compare(input, &self.bound),
            Some(Ordering::Equal | Ordering::Greater)
        )
    }
    error(self, input) {
        ValidationError::new(
            "min",
            messages::render(messages::MIN, slice::from_ref(&self.bound)),
        )
        .with_param("arg0", self.bound.clone())
    }
    new(bound: impl Into<String>) { Self { bound: bound.into() } }
    fn min(bound: impl Into<String>);
}

crate::validator! {
    /// Validates that a value does not exceed the argument.
    #[derive(PartialEq, Eq, Hash)]
    pub Max { bound: String } for Value;
    rule(self, input) {
        matches!(
            coerce::compare(input, &self.bound),
            Some(Ordering::Equal | Ordering::Less)
        )
    }
    error(self, input) {
        ValidationError::new(
            "max",
            messages::render(messages::MAX, slice::from_ref(&self.bound)),
        )
        .with_param("arg0", self.bound.clone())
    }
    new(bound: impl Into<String>) { Self { bound: bound.into() } }
    fn max(bound: impl Into<String>);
}

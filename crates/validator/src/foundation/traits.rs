//! Core traits for the validation system
//!
//! Every predicate in [`validators`](crate::validators) implements [`Validate`]
//! over a JSON [`Value`]. The registry hands them out type-erased as
//! [`DynValidator`] so one rule chain can hold any mix of predicates.

use serde_json::Value;

use crate::combinators::{Present, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every predicate implements.
///
/// A predicate is configured once (its rule arguments are parsed and checked
/// when it is built) and then evaluated against any number of values. It must
/// be pure: the same input always produces the same outcome.
///
/// # Examples
///
/// ```
/// use gatekeep_validator::foundation::{Validate, ValidationError};
/// use serde_json::{Value, json};
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         if input.as_f64() == Some(0.0) {
///             Err(ValidationError::new("non_zero", "Value must not be zero!"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&json!(3)).is_ok());
/// assert!(NonZero.validate(&json!(0)).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Err` carrying the predicate's default message on failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased predicate over JSON values, as produced by the registry.
pub type DynValidator = Box<dyn Validate<Input = Value> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Skips the validator when the value is absent or `null`.
    ///
    /// Presence is `required`'s concern alone; every other rule passes
    /// silently on a missing value.
    fn present(self) -> Present<Self>
    where
        Self: Validate<Input = Value>,
    {
        Present::new(self)
    }

    /// Replaces the error message on failure, keeping the error code.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Erases the concrete type.
    fn boxed(self) -> DynValidator
    where
        Self: Validate<Input = Value> + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = Value;

        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn boxed_validator_delegates() {
        let validator = AlwaysFails.boxed();
        let err = validator.validate(&json!("x")).unwrap_err();
        assert_eq!(err.code, "always_fails");
    }

    #[test]
    fn present_skips_null() {
        let validator = AlwaysFails.present();
        assert!(validator.validate(&Value::Null).is_ok());
        assert!(validator.validate(&json!(1)).is_err());
    }

    #[test]
    fn with_message_overrides() {
        let validator = AlwaysFails.with_message("custom");
        let err = validator.validate(&json!(1)).unwrap_err();
        assert_eq!(err.code, "always_fails");
        assert_eq!(err.message, "custom");
    }
}

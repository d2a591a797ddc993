//! MESSAGE combinator - custom error messages

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// This is how per-rule custom messages from
/// [`Validator::verify_with`](crate::engine::Validator::verify_with) are
/// applied: the predicate still decides pass/fail and keeps its error code
/// and params, only the message text changes.
///
/// # Examples
///
/// ```
/// use gatekeep_validator::combinators::WithMessage;
/// use gatekeep_validator::foundation::Validate;
/// use gatekeep_validator::validators::max;
/// use serde_json::json;
///
/// let validator = WithMessage::new(max("200"), "Whooah! Too old.");
///
/// let error = validator.validate(&json!(1000)).unwrap_err();
/// assert_eq!(error.code, "max");
/// assert_eq!(error.message, "Whooah! Too old.");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message.clone()))
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================

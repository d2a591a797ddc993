//! Error types for rule evaluation
//!
//! Two kinds of failure are kept apart:
//!
//! - [`ValidationError`] is a *rejected value*. It is recovered by the engine,
//!   recorded against the field and surfaces in the
//!   [`ValidationReport`](crate::report::ValidationReport).
//! - [`RuleError`] is a *broken rule definition* (empty field, unknown rule,
//!   wrong argument count, bad decimal precision). It aborts the run and never
//!   shows up in the report.
//!
//! All string fields of `ValidationError` use `Cow<'static, str>` so the
//! default messages from the [`messages`](crate::messages) table are not
//! copied unless a placeholder has to be substituted.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A predicate rejected a value.
///
/// # Examples
///
/// ```
/// use gatekeep_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "Value is less than 18!")
///     .with_field("age")
///     .with_param("arg0", "18");
///
/// assert_eq!(error.param("arg0"), Some("18"));
/// assert_eq!(error.to_string(), "[age] min: Value is less than 18! (params: [arg0=18])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Canonical identifier of the rule that produced the error.
    pub code: Cow<'static, str>,

    /// Human-readable message; this is what lands in the report.
    pub message: Cow<'static, str>,

    /// Field the error belongs to, when the caller attaches one.
    pub field: Option<Cow<'static, str>>,

    /// Rule arguments, stored as ordered `argN` pairs.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code, field and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// RULE ERROR
// ============================================================================

/// A rule definition that cannot be evaluated.
///
/// Returned from [`Validator::verify`](crate::engine::Validator::verify) and
/// [`Validator::run`](crate::engine::Validator::run). These are programming
/// errors in the rule set, not properties of the data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// `verify` was called with an empty field name or an empty rule chain.
    #[error("missing field/rule (field: {field:?}, rules: {rules:?})")]
    InvalidRuleDefinition {
        /// Field name as given.
        field: String,
        /// Rule chain as given.
        rules: String,
    },

    /// No registered rule matches the identifier after normalization.
    #[error("unknown rule `{identifier}`")]
    UnknownRule {
        /// Identifier exactly as written in the chain.
        identifier: String,
    },

    /// The rule was given the wrong number of arguments.
    #[error("rule `{rule}` expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Rule identifier as written.
        rule: String,
        /// Human-readable expectation, e.g. `"1"` or `"0 to 2"`.
        expected: &'static str,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// An argument has the right arity but an unusable value.
    #[error("rule `{rule}` has invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Rule identifier as written.
        rule: String,
        /// Offending argument text.
        argument: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl RuleError {
    pub(crate) fn argument_count(rule: &str, expected: &'static str, actual: usize) -> Self {
        Self::ArgumentCount {
            rule: rule.to_owned(),
            expected,
            actual,
        }
    }

    pub(crate) fn invalid_argument(rule: &str, argument: &str, reason: &'static str) -> Self {
        Self::InvalidArgument {
            rule: rule.to_owned(),
            argument: argument.to_owned(),
            reason,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

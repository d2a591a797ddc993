//! Presence validator
//!
//! [`Required`] is the only rule that looks at absent and `null` values; all
//! other rules are skipped for them.
//!
//! # Examples
//!
//! ```
//! use gatekeep_validator::foundation::Validate;
//! use gatekeep_validator::validators::required;
//! use serde_json::{Value, json};
//!
//! assert!(required().validate(&json!("bobby")).is_ok());
//! assert!(required().validate(&json!(0)).is_ok());
//! assert!(required().validate(&json!("   ")).is_err());
//! assert!(required().validate(&Value::Null).is_err());
//! ```

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::messages;

/// Characters stripped before the emptiness check. Other Unicode whitespace,
/// such as a no-break space, counts as content.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

crate::validator! {
    /// Fails on absent/`null` values and on strings that are empty after
    /// trimming ASCII blanks (space, tab, newline, carriage return, NUL and
    /// vertical tab). Any other present value passes.
    pub Required for Value;
    rule(input) {
        match input {
            Value::Null => false,
            Value::String(s) => !s.trim_matches(is_blank).is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => true,
        }
    }
    error(input) { ValidationError::new("required", messages::REQUIRED) }
    fn required();
}

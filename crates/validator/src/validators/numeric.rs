//! Numeric type and shape validators

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{RuleError, ValidationError, coerce};
use crate::messages;

static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?<int>[0-9]+)\.(?<frac>[0-9]+)$").expect("decimal pattern is valid")
});

crate::validator! {
    /// Validates that a value is a JSON integer.
    ///
    /// Numeric strings such as `"12"` and floats such as `12.0` fail: the
    /// check is on the value's type, not its text.
    pub Int for Value;
    rule(input) { input.is_i64() || input.is_u64() }
    error(input) { ValidationError::new("int", messages::INT) }
    fn int();
}

crate::validator! {
    /// Validates a signed `digits.digits` decimal against an optional
    /// precision (total digits) and scale (fractional digits).
    ///
    /// - precision and scale: integer part has at most `precision - scale`
    ///   digits, fractional part at most `scale`
    /// - precision only: integer part has at most `precision` digits
    /// - neither: any `digits.digits` shape
    ///
    /// Leading zeros of the integer part are not counted, so `0.25` fits
    /// `decimal:2:2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatekeep_validator::foundation::Validate;
    /// use gatekeep_validator::validators::decimal;
    /// use serde_json::json;
    ///
    /// let validator = decimal(Some(8), Some(2))?;
    /// assert!(validator.validate(&json!("123456.78")).is_ok());
    /// assert!(validator.validate(&json!("123456789.78")).is_err());
    /// assert!(validator.validate(&json!("1.234")).is_err());
    /// # Ok::<(), gatekeep_validator::foundation::RuleError>(())
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Decimal { precision: Option<u32>, scale: Option<u32> } for Value;
    rule(self, input) {
        coerce::as_text(input).is_some_and(|text| self.fits(&text))
    }
    error(self, input) {
        let mut error = ValidationError::new("decimal", messages::DECIMAL);
        if let Some(precision) = self.precision {
            error = error.with_param("arg0", precision.to_string());
        }
        if let Some(scale) = self.scale {
            error = error.with_param("arg1", scale.to_string());
        }
        error
    }
    new(precision: Option<u32>, scale: Option<u32>) -> RuleError {
        if let Some(p) = precision.filter(|p| *p < 1) {
            return Err(RuleError::invalid_argument("decimal", &p.to_string(), "precision must be at least 1"));
        }
        if let Some(s) = scale.filter(|s| *s < 1) {
            return Err(RuleError::invalid_argument("decimal", &s.to_string(), "scale must be at least 1"));
        }
        if let (Some(p), Some(s)) = (precision, scale) {
            if s > p {
                return Err(RuleError::invalid_argument("decimal", &s.to_string(), "scale must not exceed precision"));
            }
        }
        Ok(Self { precision, scale })
    }
    fn decimal(precision: Option<u32>, scale: Option<u32>) -> RuleError;
}

impl Decimal {
    fn fits(&self, text: &str) -> bool {
        let Some(caps) = DECIMAL_REGEX.captures(text) else {
            return false;
        };
        let int_digits = caps["int"].trim_start_matches('0').len();
        let frac_digits = caps["frac"].len();

        let int_limit = match (self.precision, self.scale) {
            (Some(p), Some(s)) => Some(p.saturating_sub(s)),
            (Some(p), None) => Some(p),
            (None, _) => None,
        };

        int_limit.is_none_or(|limit| int_digits <= limit as usize)
            && self.scale.is_none_or(|limit| frac_digits <= limit as usize)
    }
}

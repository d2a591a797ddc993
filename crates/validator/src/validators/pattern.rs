//! Character-class validators
//!
//! Both rules are ASCII-only and need at least one character. Numbers are
//! checked through their JSON rendering, so `alpha-num` accepts `42` while
//! `alpha` rejects it. Booleans are rejected by both.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{ValidationError, coerce};
use crate::messages;

static ALPHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("alpha pattern is valid"));

static ALPHA_NUM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alpha-num pattern is valid"));

fn matches_text(pattern: &Regex, input: &Value) -> bool {
    coerce::as_text(input).is_some_and(|text| pattern.is_match(&text))
}

crate::validator! {
    /// Validates that a value consists solely of ASCII letters.
    pub Alpha for Value;
    rule(input) { matches_text(&ALPHA_REGEX, input) }
    error(input) { ValidationError::new("alpha", messages::ALPHA) }
    fn alpha();
}

crate::validator! {
    /// Validates that a value consists solely of ASCII letters and digits,
    /// plus any extra symbols configured with [`AlphaNumeric::with_symbols`].
    ///
    /// The rule-chain syntax has no way to pass extra symbols, so
    /// `alpha-num` from a chain always uses the plain set.
    pub AlphaNumeric { pattern: Regex, symbols: String } for Value;
    rule(self, input) { matches_text(&self.pattern, input) }
    error(self, input) {
        let error = ValidationError::new("alpha-num", messages::ALPHA_NUM);
        if self.symbols.is_empty() {
            error
        } else {
            error.with_param("symbols", self.symbols.clone())
        }
    }
    new() {
        Self {
            pattern: ALPHA_NUM_REGEX.clone(),
            symbols: String::new(),
        }
    }
    fn alpha_num();
}

impl AlphaNumeric {
    /// Also accepts every character in `symbols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatekeep_validator::foundation::Validate;
    /// use gatekeep_validator::validators::AlphaNumeric;
    /// use serde_json::json;
    ///
    /// let validator = AlphaNumeric::with_symbols("-_");
    /// assert!(validator.validate(&json!("ab-12_c")).is_ok());
    /// assert!(validator.validate(&json!("ab 12")).is_err());
    /// ```
    #[must_use]
    pub fn with_symbols(symbols: &str) -> Self {
        if symbols.is_empty() {
            return Self::new();
        }

        let class: String = symbols
            .chars()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        // Every class member is escaped, so the pattern is always valid.
        let pattern = Regex::new(&format!("^[A-Za-z0-9{class}]+$"))
            .unwrap_or_else(|_| ALPHA_NUM_REGEX.clone());

        Self {
            pattern,
            symbols: symbols.to_owned(),
        }
    }
}

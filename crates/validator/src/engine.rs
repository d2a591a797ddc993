//! Rule-chain evaluation
//!
//! [`validate`] starts a [`Validator`] over a borrowed data object.
//! [`Validator::verify`] appends one field's rule chain; [`Validator::run`]
//! evaluates every chain and returns a [`ValidationReport`].
//!
//! Within a field, rules run in declared order and the first failure wins:
//! its message is recorded and the rest of the chain is skipped. Fields are
//! independent of each other.
//!
//! # Examples
//!
//! ```
//! use gatekeep_validator::validate;
//! use serde_json::json;
//!
//! let data = json!({ "name": "bobby", "age": 1000 });
//! let data = data.as_object().unwrap();
//!
//! let report = validate(data)
//!     .verify("id", "required")?
//!     .verify("name", "required")?
//!     .verify_with(
//!         "age",
//!         "min:18|max:200",
//!         [("min", "Whooah! Too young."), ("max", "Whooah! Too old.")],
//!     )?
//!     .run()?;
//!
//! assert!(!report.success());
//! assert_eq!(report.message_for("id"), Some("Field is required!"));
//! assert_eq!(report.message_for("age"), Some("Whooah! Too old."));
//! assert_eq!(report.message_for("name"), None);
//! # Ok::<(), gatekeep_validator::foundation::RuleError>(())
//! ```

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::chain::RuleChain;
use crate::foundation::{DynValidator, RuleError, Validate, ValidateExt, ValidationError};
use crate::messages;
use crate::registry;
use crate::report::ValidationReport;

static NULL: Value = Value::Null;

// ============================================================================
// VERIFY ENTRY
// ============================================================================

/// One registered field: its name, parsed rule chain and custom messages.
///
/// Custom messages are keyed by the rule identifier exactly as written in the
/// chain, so `alpha-num` and `alphaNum` are distinct keys even though they
/// resolve to the same rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEntry {
    field: String,
    rules: RuleChain,
    messages: IndexMap<String, String>,
}

impl VerifyEntry {
    /// Creates an entry, rejecting an empty field name or rule chain.
    pub fn new(field: impl Into<String>, rules: &str) -> Result<Self, RuleError> {
        let field = field.into();
        if field.is_empty() || rules.is_empty() {
            return Err(RuleError::InvalidRuleDefinition {
                field,
                rules: rules.to_owned(),
            });
        }

        Ok(Self {
            field,
            rules: RuleChain::parse(rules),
            messages: IndexMap::new(),
        })
    }

    /// Adds custom failure messages keyed by rule identifier.
    #[must_use]
    pub fn with_messages<I, K, V>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &RuleChain {
        &self.rules
    }

    pub fn messages(&self) -> &IndexMap<String, String> {
        &self.messages
    }

    /// Builds the chain's predicates, applying custom messages.
    fn compile(&self) -> Result<Vec<DynValidator>, RuleError> {
        self.rules
            .iter()
            .map(|token| {
                let validator = registry::build(token)?;
                Ok(match self.messages.get(&token.name) {
                    Some(custom) => validator
                        .with_message(messages::render_owned(custom, &token.args))
                        .boxed(),
                    None => validator,
                })
            })
            .collect()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Begins validating `data`.
pub fn validate(data: &Map<String, Value>) -> Validator<'_> {
    Validator::new(data)
}

/// Ordered list of verification entries over a borrowed data object.
///
/// Registering entries has no side effects; nothing is resolved or evaluated
/// until [`run`](Self::run). Running the same validator twice over the same
/// data yields equal reports.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    data: &'a Map<String, Value>,
    entries: Vec<VerifyEntry>,
}

impl<'a> Validator<'a> {
    pub fn new(data: &'a Map<String, Value>) -> Self {
        Self {
            data,
            entries: Vec::new(),
        }
    }

    /// Appends a rule chain for `field`.
    ///
    /// # Errors
    ///
    /// [`RuleError::InvalidRuleDefinition`] if `field` or `rules` is empty.
    pub fn verify(self, field: impl Into<String>, rules: &str) -> Result<Self, RuleError> {
        let entry = VerifyEntry::new(field, rules)?;
        Ok(self.entry(entry))
    }

    /// Appends a rule chain for `field` with custom failure messages.
    ///
    /// Messages are keyed by rule identifier as written. Like the defaults,
    /// they are rendered with the rule's arguments, so `{arg0}` in a custom
    /// message is replaced by the first argument.
    ///
    /// # Errors
    ///
    /// [`RuleError::InvalidRuleDefinition`] if `field` or `rules` is empty.
    pub fn verify_with<I, K, V>(
        self,
        field: impl Into<String>,
        rules: &str,
        messages: I,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = VerifyEntry::new(field, rules)?.with_messages(messages);
        Ok(self.entry(entry))
    }

    /// Appends an already constructed entry.
    #[must_use]
    pub fn entry(mut self, entry: VerifyEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Registered entries, in registration order.
    pub fn entries(&self) -> &[VerifyEntry] {
        &self.entries
    }

    /// Evaluates every registered chain against the data.
    ///
    /// All chains are resolved before any value is looked at, so a broken
    /// rule definition is reported regardless of the data.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] found while building the chains.
    /// Rejected values are not errors; they are recorded in the report.
    pub fn run(&self) -> Result<ValidationReport, RuleError> {
        let compiled = self
            .entries
            .iter()
            .map(VerifyEntry::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let mut failures: IndexMap<String, String> = IndexMap::new();
        for (entry, chain) in self.entries.iter().zip(&compiled) {
            if failures.contains_key(&entry.field) {
                tracing::trace!(field = %entry.field, "field already failed, skipping entry");
                continue;
            }

            let value = self.data.get(&entry.field).unwrap_or(&NULL);
            if let Some(error) = evaluate(entry, chain, value) {
                failures.insert(entry.field.clone(), error.message.into_owned());
            }
        }

        tracing::debug!(
            entries = self.entries.len(),
            failures = failures.len(),
            "validation run finished"
        );
        Ok(ValidationReport::from_fields(failures))
    }
}

/// Runs `chain` over `value`, returning the first failure tagged with the
/// entry's field.
fn evaluate(
    entry: &VerifyEntry,
    chain: &[DynValidator],
    value: &Value,
) -> Option<ValidationError> {
    for (token, validator) in entry.rules.iter().zip(chain) {
        tracing::trace!(field = %entry.field, rule = %token.name, "evaluating rule");

        let Err(error) = validator.validate(value) else {
            continue;
        };

        let error = error.with_field(entry.field.clone());
        tracing::debug!(rule = %token.name, %error, "field rejected");
        return Some(error);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_field_or_rules_is_rejected() {
        let data = data(json!({}));
        let error = validate(&data).verify("", "required").unwrap_err();
        assert_eq!(
            error,
            RuleError::InvalidRuleDefinition {
                field: String::new(),
                rules: "required".to_owned(),
            }
        );
        assert!(validate(&data).verify("name", "").is_err());
    }

    #[test]
    fn no_entries_is_success() {
        let data = data(json!({ "a": 1 }));
        let report = validate(&data).run().unwrap();
        assert!(report.success());
    }

    #[test]
    fn first_failure_wins() {
        let data = data(json!({ "age": 5 }));
        let report = validate(&data)
            .verify("age", "min:18|max:1|equal:7")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.message_for("age"), Some("Value is less than 18!"));
    }

    #[test]
    fn custom_message_by_identifier_as_written() {
        let data = data(json!({ "code": "a-1" }));
        let report = validate(&data)
            .verify_with(
                "code",
                "alphaNum",
                [("alpha-num", "not used"), ("alphaNum", "Only {arg0} letters")],
            )
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.message_for("code"), Some("Only {arg0} letters"));
    }

    #[test]
    fn failure_is_tagged_with_field() {
        let entry = VerifyEntry::new("age", "required|min:18").unwrap();
        let chain = entry.compile().unwrap();

        let error = evaluate(&entry, &chain, &json!(3)).unwrap();
        assert_eq!(error.field.as_deref(), Some("age"));
        assert_eq!(
            error.to_string(),
            "[age] min: Value is less than 18! (params: [arg0=18])"
        );
        assert!(evaluate(&entry, &chain, &json!(30)).is_none());
    }

    #[test]
    fn custom_message_substitutes_arguments() {
        let data = data(json!({ "age": 3 }));
        let report = validate(&data)
            .verify_with("age", "min:18", [("min", "At least {arg0}, got less")])
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.message_for("age"), Some("At least 18, got less"));
    }

    #[test]
    fn configuration_errors_do_not_depend_on_data() {
        let data = data(json!({}));
        let validator = validate(&data)
            .verify("missing", "int")
            .unwrap()
            .verify("other", "between:1:2")
            .unwrap();
        assert_eq!(
            validator.run().unwrap_err(),
            RuleError::UnknownRule {
                identifier: "between".to_owned()
            }
        );
    }

    #[test]
    fn configuration_error_wins_over_earlier_failures() {
        let data = data(json!({}));
        let result = validate(&data)
            .verify("id", "required")
            .unwrap()
            .verify("age", "min")
            .unwrap()
            .run();
        assert!(matches!(result, Err(RuleError::ArgumentCount { .. })));
    }

    #[test]
    fn repeated_field_keeps_first_failure() {
        let data = data(json!({ "name": "bobby1" }));
        let report = validate(&data)
            .verify("name", "alpha")
            .unwrap()
            .verify("name", "equal:x")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(
            report.message_for("name"),
            Some("Value must contain only alphabetic characters!")
        );
    }

    #[test]
    fn repeated_field_runs_later_entry_after_pass() {
        let data = data(json!({ "name": "bobby" }));
        let report = validate(&data)
            .verify("name", "alpha")
            .unwrap()
            .verify("name", "equal:x")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.message_for("name"), Some("Value must be equal to x!"));
    }

    #[test]
    fn entries_are_kept_in_order() {
        let data = data(json!({}));
        let validator = validate(&data)
            .verify("b", "int")
            .unwrap()
            .verify_with("a", "min:1", [("min", "low")])
            .unwrap();
        let fields: Vec<_> = validator.entries().iter().map(VerifyEntry::field).collect();
        assert_eq!(fields, ["b", "a"]);
        assert_eq!(validator.entries()[1].messages()["min"], "low");
        assert_eq!(validator.entries()[1].rules().to_string(), "min:1");
    }
}

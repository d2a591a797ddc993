//! Rules file loading.
//!
//! A rules file lists verification entries in order:
//!
//! ```toml
//! [[fields]]
//! field = "age"
//! rules = "min:18|max:200"
//! messages = { max = "Whooah! Too old." }
//! ```
//!
//! The JSON form is `{ "fields": [ { "field": ..., "rules": ..., "messages": {...} } ] }`.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use gatekeep_validator::engine::{Validator, VerifyEntry};
use gatekeep_validator::foundation::RuleError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RulesFile {
    pub fields: Vec<FieldRules>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldRules {
    pub field: String,
    pub rules: String,
    #[serde(default)]
    pub messages: IndexMap<String, String>,
}

impl RulesFile {
    /// Reads a `.toml` file as TOML and anything else as JSON.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(&text)
                .with_context(|| format!("failed to parse rules file {}", path.display()))
        } else {
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse rules file {}", path.display()))
        }
    }

    /// Registers every entry, in file order, on `validator`.
    pub fn apply<'a>(&self, validator: Validator<'a>) -> Result<Validator<'a>, RuleError> {
        self.fields.iter().try_fold(validator, |validator, entry| {
            let entry = VerifyEntry::new(entry.field.as_str(), &entry.rules)?
                .with_messages(entry.messages.clone());
            Ok(validator.entry(entry))
        })
    }
}

/// Reads the data file, which must hold a single JSON object.
pub fn load_data(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse data file {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!(
            "data file {} must contain a JSON object, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_toml_entries() {
        let file: RulesFile = toml::from_str(
            r#"
            [[fields]]
            field = "id"
            rules = "required"

            [[fields]]
            field = "age"
            rules = "min:18|max:200"
            messages = { min = "Whooah! Too young.", max = "Whooah! Too old." }
            "#,
        )
        .unwrap();

        assert_eq!(file.fields.len(), 2);
        assert!(file.fields[0].messages.is_empty());
        assert_eq!(file.fields[1].messages["max"], "Whooah! Too old.");
    }

    #[test]
    fn apply_keeps_order_and_rejects_empty_rules() {
        let file: RulesFile = serde_json::from_str(
            r#"{ "fields": [ { "field": "b", "rules": "int" }, { "field": "a", "rules": "alpha" } ] }"#,
        )
        .unwrap();
        let data = Map::new();
        let validator = file.apply(gatekeep_validator::validate(&data)).unwrap();
        let order: Vec<_> = validator.entries().iter().map(VerifyEntry::field).collect();
        assert_eq!(order, ["b", "a"]);

        let broken: RulesFile =
            serde_json::from_str(r#"{ "fields": [ { "field": "b", "rules": "" } ] }"#).unwrap();
        assert!(broken.apply(gatekeep_validator::validate(&data)).is_err());
    }
}

//! Evaluation result
//!
//! [`ValidationReport`] is what [`Validator::run`](crate::engine::Validator::run)
//! hands back when every rule could be evaluated. Rejected input is a normal
//! report with `success == false`; broken rule definitions never get this far.

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Overall outcome plus the first failure message per field.
///
/// Fields appear in the order they were registered with
/// [`verify`](crate::engine::Validator::verify). Serializes as
/// `{ "success": bool, "fields": { field: message } }`. Deserializing
/// rejects a payload whose `success` flag disagrees with its `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    success: bool,
    fields: IndexMap<String, String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::from_fields(IndexMap::new())
    }
}

impl<'de> Deserialize<'de> for ValidationReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawReport {
            success: bool,
            fields: IndexMap<String, String>,
        }

        let raw = RawReport::deserialize(deserializer)?;
        if raw.success != raw.fields.is_empty() {
            return Err(de::Error::custom(format_args!(
                "report has success={} with {} failed field(s)",
                raw.success,
                raw.fields.len()
            )));
        }
        Ok(Self::from_fields(raw.fields))
    }
}

impl ValidationReport {
    /// Builds a report from the collected failures. Success is derived: a
    /// report with no failures is successful.
    #[must_use]
    pub fn from_fields(fields: IndexMap<String, String>) -> Self {
        Self {
            success: fields.is_empty(),
            fields,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Alias of [`success`](Self::success).
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Field name to failure message, in registration order.
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// Failure message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn into_parts(self) -> (bool, IndexMap<String, String>) {
        (self.success, self.fields)
    }

    /// Plain JSON structure of the report.
    pub fn to_json_value(&self) -> Value {
        let fields: Map<String, Value> = self
            .fields
            .iter()
            .map(|(field, message)| (field.clone(), Value::String(message.clone())))
            .collect();
        serde_json::json!({
            "success": self.success,
            "fields": Value::Object(fields),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rejected() -> ValidationReport {
        let mut fields = IndexMap::new();
        fields.insert("id".to_owned(), "Field is required!".to_owned());
        fields.insert("age".to_owned(), "Whooah! Too old.".to_owned());
        ValidationReport::from_fields(fields)
    }

    #[test]
    fn empty_report_is_successful() {
        let report = ValidationReport::from_fields(IndexMap::new());
        assert!(report.success());
        assert!(report.fields().is_empty());
        assert_eq!(report, ValidationReport::default());
    }

    #[test]
    fn failures_make_report_unsuccessful() {
        let report = rejected();
        assert!(!report.is_success());
        assert_eq!(report.message_for("age"), Some("Whooah! Too old."));
        assert_eq!(report.message_for("name"), None);
    }

    #[test]
    fn json_shape() {
        let value = rejected().to_json_value();
        assert_eq!(
            value,
            json!({
                "success": false,
                "fields": { "id": "Field is required!", "age": "Whooah! Too old." }
            })
        );
    }

    #[test]
    fn serde_matches_json_shape() {
        let report = rejected();
        let serialized = serde_json::to_value(&report).unwrap();
        assert_eq!(serialized, report.to_json_value());

        let back: ValidationReport = serde_json::from_value(serialized).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn deserialize_rejects_inconsistent_success() {
        let error = serde_json::from_value::<ValidationReport>(json!({
            "success": true,
            "fields": { "a": "bad" }
        }))
        .unwrap_err();
        assert!(error.to_string().contains("success=true with 1 failed field(s)"));

        let result = serde_json::from_value::<ValidationReport>(json!({
            "success": false,
            "fields": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_empty_report() {
        let report: ValidationReport =
            serde_json::from_value(json!({ "success": true, "fields": {} })).unwrap();
        assert_eq!(report, ValidationReport::default());
    }

    #[test]
    fn into_parts() {
        let (success, fields) = rejected().into_parts();
        assert!(!success);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn field_order_follows_insertion() {
        let keys: Vec<_> = rejected().fields().keys().cloned().collect();
        assert_eq!(keys, ["id", "age"]);
    }
}

//! Explicit coercion rules for comparing JSON values with rule arguments.
//!
//! Rule arguments are always strings (`"min:18"` yields `"18"`), while data
//! values may be strings or numbers. The rules are:
//!
//! 1. A value is *numeric-like* when it is a JSON number, or a string that
//!    parses as a finite `f64` once surrounding whitespace is trimmed.
//! 2. When both sides are numeric-like they are compared as `f64`.
//! 3. Otherwise both sides are compared by their text form, byte-wise.
//! 4. Booleans, arrays and objects have no text form and are never
//!    comparable. Character-class and `decimal` rules reject them.

use std::cmp::Ordering;

use serde_json::Value;

/// Returns the numeric view of a value, if it is numeric-like.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Parses a rule argument or string value as a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Returns the text view of a scalar value.
///
/// Strings are returned as-is and numbers use their JSON rendering.
/// `null`, booleans, arrays and objects have no text form.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Compares a value against a rule argument using the rules above.
///
/// Returns `None` when the two cannot be ordered (booleans, structured
/// values, `NaN`).
pub fn compare(value: &Value, argument: &str) -> Option<Ordering> {
    if let (Some(lhs), Some(rhs)) = (as_number(value), parse_number(argument)) {
        return lhs.partial_cmp(&rhs);
    }

    as_text(value).map(|text| text.as_str().cmp(argument))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1000), "200", Some(Ordering::Greater))]
    #[case(json!("17"), "18", Some(Ordering::Less))]
    #[case(json!(" 18 "), "18", Some(Ordering::Equal))]
    #[case(json!(18.0), "18", Some(Ordering::Equal))]
    #[case(json!("9"), "10", Some(Ordering::Less))]
    #[case(json!("abc"), "abd", Some(Ordering::Less))]
    #[case(json!("abc"), "10", Some(Ordering::Greater))]
    #[case(json!(true), "true", None)]
    #[case(json!(true), "200", None)]
    #[case(json!(false), "0", None)]
    #[case(json!([1, 2]), "1", None)]
    #[case(json!({"a": 1}), "1", None)]
    fn test_compare(#[case] value: Value, #[case] argument: &str, #[case] expected: Option<Ordering>) {
        assert_eq!(compare(&value, argument), expected);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(42)), Some(42.0));
        assert_eq!(as_number(&json!("4.5")), Some(4.5));
        assert_eq!(as_number(&json!("four")), None);
        assert_eq!(as_number(&json!("inf")), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&Value::Null), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(&json!("bobby")).as_deref(), Some("bobby"));
        assert_eq!(as_text(&json!(12)).as_deref(), Some("12"));
        assert_eq!(as_text(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(as_text(&json!(true)), None);
        assert_eq!(as_text(&json!(false)), None);
        assert_eq!(as_text(&Value::Null), None);
    }
}

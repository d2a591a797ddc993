//! Default failure messages.
//!
//! Messages live in one table keyed by canonical rule identifier instead of
//! inside each predicate, so they can be listed, overridden and tested in one
//! place. Placeholders of the form `{arg0}`, `{arg1}`, ... are replaced with
//! the rule's positional arguments.

use std::borrow::Cow;

pub const REQUIRED: &str = "Field is required!";
pub const EQUAL: &str = "Value must be equal to {arg0}!";
pub const MIN: &str = "Value is less than {arg0}!";
pub const MAX: &str = "Value is greater than {arg0}!";
pub const ALPHA: &str = "Value must contain only alphabetic characters!";
pub const ALPHA_NUM: &str = "Value must contain only alphanumeric characters!";
pub const INT: &str = "Value must be an integer!";
pub const DECIMAL: &str = "Value must be a decimal!";

/// Canonical rule identifier -> default message.
pub const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("required", REQUIRED),
    ("equal", EQUAL),
    ("min", MIN),
    ("max", MAX),
    ("alpha", ALPHA),
    ("alpha-num", ALPHA_NUM),
    ("int", INT),
    ("decimal", DECIMAL),
];

/// Looks up the default message template for a canonical rule identifier.
#[must_use]
pub fn default_template(rule: &str) -> Option<&'static str> {
    DEFAULT_MESSAGES
        .iter()
        .find(|(name, _)| *name == rule)
        .map(|(_, template)| *template)
}

/// Substitutes `{argN}` placeholders in `template` with `args[N]`.
///
/// Placeholders without a matching argument are left untouched. Templates
/// without any placeholder are returned borrowed.
#[must_use]
pub fn render(template: &'static str, args: &[String]) -> Cow<'static, str> {
    render_str(template, args).map_or(Cow::Borrowed(template), Cow::Owned)
}

/// Same as [`render`] for caller-owned templates such as custom messages.
#[must_use]
pub fn render_owned(template: &str, args: &[String]) -> String {
    render_str(template, args).unwrap_or_else(|| template.to_owned())
}

fn render_str(template: &str, args: &[String]) -> Option<String> {
    if !template.contains("{arg") {
        return None;
    }

    let mut out = template.to_owned();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{arg{i}}}"), arg);
    }
    Some(out)
}

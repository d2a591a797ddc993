//! Static rule registry
//!
//! Maps normalized rule identifiers to the factories that build configured
//! predicates. The table is fixed at compile time; identifiers that do not
//! resolve are reported as [`RuleError::UnknownRule`].
//!
//! Normalization lowercases the identifier and drops `-` and `_`, so
//! `alpha-num`, `alpha_num`, `alphaNum` and `ALPHANUM` all resolve to the same
//! rule.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::chain::RuleToken;
use crate::foundation::{DynValidator, RuleError, ValidateExt};
use crate::messages;
use crate::validators::{Decimal, alpha, alpha_num, equal, int, max, min, required};

// ============================================================================
// DEFINITIONS
// ============================================================================

/// How many positional arguments a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// Between `min` and `max` arguments, inclusive.
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Between(lo, hi) => (lo..=hi).contains(&count),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Exact(0) => "no",
            Self::Exact(1) => "exactly 1",
            Self::Between(0, 2) => "0 to 2",
            Self::Exact(_) | Self::Between(..) => "a different number of",
        }
    }
}

type Factory = fn(&[String]) -> Result<DynValidator, RuleError>;

/// A registered rule: canonical identifier, accepted arity and factory.
#[derive(Clone, Copy)]
pub struct RuleDefinition {
    name: &'static str,
    arity: Arity,
    factory: Factory,
}

impl RuleDefinition {
    /// Canonical identifier, e.g. `alpha-num`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Default failure message template, with `{argN}` placeholders intact.
    pub fn default_message(&self) -> &'static str {
        messages::default_template(self.name).unwrap_or_default()
    }
}

impl std::fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

static DEFINITIONS: &[RuleDefinition] = &[
    RuleDefinition {
        name: "required",
        arity: Arity::Exact(0),
        factory: |_| Ok(required().boxed()),
    },
    RuleDefinition {
        name: "equal",
        arity: Arity::Exact(1),
        factory: |args| Ok(equal(args[0].as_str()).present().boxed()),
    },
    RuleDefinition {
        name: "min",
        arity: Arity::Exact(1),
        factory: |args| Ok(min(args[0].as_str()).present().boxed()),
    },
    RuleDefinition {
        name: "max",
        arity: Arity::Exact(1),
        factory: |args| Ok(max(args[0].as_str()).present().boxed()),
    },
    RuleDefinition {
        name: "alpha",
        arity: Arity::Exact(0),
        factory: |_| Ok(alpha().present().boxed()),
    },
    RuleDefinition {
        name: "alpha-num",
        arity: Arity::Exact(0),
        factory: |_| Ok(alpha_num().present().boxed()),
    },
    RuleDefinition {
        name: "int",
        arity: Arity::Exact(0),
        factory: |_| Ok(int().present().boxed()),
    },
    RuleDefinition {
        name: "decimal",
        arity: Arity::Between(0, 2),
        factory: build_decimal,
    },
];

fn build_decimal(args: &[String]) -> Result<DynValidator, RuleError> {
    let parse = |arg: Option<&String>| {
        arg.map(|text| {
            text.parse::<u32>().map_err(|_| {
                RuleError::invalid_argument("decimal", text, "expected a non-negative integer")
            })
        })
        .transpose()
    };
    let precision = parse(args.first())?;
    let scale = parse(args.get(1))?;
    Ok(Decimal::new(precision, scale)?.present().boxed())
}

static REGISTRY: LazyLock<HashMap<String, &'static RuleDefinition>> = LazyLock::new(|| {
    DEFINITIONS
        .iter()
        .map(|definition| (normalize(definition.name), definition))
        .collect()
});

// ============================================================================
// LOOKUP
// ============================================================================

/// Lowercases `identifier` and removes `-` and `_`.
///
/// ```
/// use gatekeep_validator::registry::normalize;
///
/// assert_eq!(normalize("alpha-num"), "alphanum");
/// assert_eq!(normalize("Alpha_Num"), "alphanum");
/// ```
#[must_use]
pub fn normalize(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the rule registered under `identifier`.
pub fn resolve(identifier: &str) -> Result<&'static RuleDefinition, RuleError> {
    REGISTRY
        .get(&normalize(identifier))
        .copied()
        .ok_or_else(|| RuleError::UnknownRule {
            identifier: identifier.to_owned(),
        })
}

/// Resolves `token` and builds its configured predicate.
///
/// Every rule other than `required` comes back wrapped so that it passes on
/// absent and `null` values.
///
/// # Errors
///
/// - [`RuleError::UnknownRule`] if the identifier is not registered
/// - [`RuleError::ArgumentCount`] if the arity does not match
/// - [`RuleError::InvalidArgument`] if an argument is unusable
///
/// # Examples
///
/// ```
/// use gatekeep_validator::chain::RuleToken;
/// use gatekeep_validator::foundation::Validate;
/// use gatekeep_validator::registry::build;
/// use serde_json::json;
///
/// let min = build(&RuleToken::parse("min:18"))?;
/// assert!(min.validate(&json!(21)).is_ok());
/// assert!(min.validate(&json!(null)).is_ok());
///
/// assert!(build(&RuleToken::parse("min")).is_err());
/// # Ok::<(), gatekeep_validator::foundation::RuleError>(())
/// ```
pub fn build(token: &RuleToken) -> Result<DynValidator, RuleError> {
    let definition = resolve(&token.name)?;
    if !definition.arity.accepts(token.args.len()) {
        return Err(RuleError::argument_count(
            &token.name,
            definition.arity.describe(),
            token.args.len(),
        ));
    }

    tracing::trace!(rule = definition.name, args = ?token.args, "building rule");
    (definition.factory)(&token.args)
}

/// Canonical identifiers of every registered rule, in registration order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    DEFINITIONS.iter().map(|definition| definition.name)
}

/// Every registered rule, in registration order.
pub fn definitions() -> &'static [RuleDefinition] {
    DEFINITIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("required", "required")]
    #[case("REQUIRED", "required")]
    #[case("alpha-num", "alpha-num")]
    #[case("alpha_num", "alpha-num")]
    #[case("alphaNum", "alpha-num")]
    #[case("Alpha-Num", "alpha-num")]
    #[case("de-ci_mal", "decimal")]
    fn resolves_normalized_identifiers(#[case] identifier: &str, #[case] expected: &str) {
        assert_eq!(resolve(identifier).unwrap().name(), expected);
    }

    #[rstest]
    #[case("alphanumeric")]
    #[case("")]
    #[case(" min")]
    #[case("between")]
    fn rejects_unknown_identifiers(#[case] identifier: &str) {
        assert_eq!(
            resolve(identifier).unwrap_err(),
            RuleError::UnknownRule {
                identifier: identifier.to_owned()
            }
        );
    }

    #[rstest]
    #[case("required:x", 1)]
    #[case("equal", 0)]
    #[case("min:1:2", 2)]
    #[case("max", 0)]
    #[case("alpha:x", 1)]
    #[case("int:1", 1)]
    #[case("decimal:8:2:1", 3)]
    fn rejects_wrong_arity(#[case] descriptor: &str, #[case] actual: usize) {
        let error = build(&RuleToken::parse(descriptor)).err().unwrap();
        assert!(
            matches!(error, RuleError::ArgumentCount { actual: a, .. } if a == actual),
            "{descriptor}: {error}"
        );
    }

    #[rstest]
    #[case("decimal:x")]
    #[case("decimal:8:")]
    #[case("decimal:-1")]
    #[case("decimal:0")]
    #[case("decimal:2:3")]
    fn rejects_invalid_decimal_configuration(#[case] descriptor: &str) {
        let error = build(&RuleToken::parse(descriptor)).err().unwrap();
        assert!(matches!(error, RuleError::InvalidArgument { .. }), "{error}");
    }

    #[test]
    fn required_is_not_skipped_on_null() {
        let required = build(&RuleToken::parse("required")).unwrap();
        assert!(required.validate(&json!(null)).is_err());
    }

    #[rstest]
    #[case("equal:1")]
    #[case("min:18")]
    #[case("max:20")]
    #[case("alpha")]
    #[case("alpha-num")]
    #[case("int")]
    #[case("decimal:8:2")]
    fn other_rules_skip_null(#[case] descriptor: &str) {
        let validator = build(&RuleToken::parse(descriptor)).unwrap();
        assert!(validator.validate(&json!(null)).is_ok());
    }

    #[test]
    fn lists_every_rule_with_a_default_message() {
        let names: Vec<_> = rule_names().collect();
        assert_eq!(
            names,
            ["required", "equal", "min", "max", "alpha", "alpha-num", "int", "decimal"]
        );
        for definition in definitions() {
            assert!(!definition.default_message().is_empty());
        }
    }
}

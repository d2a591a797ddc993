//! Rule-chain parsing.
//!
//! A rule chain is a `|`-separated list of rule tokens; each token is a rule
//! identifier followed by zero or more `:`-separated positional arguments:
//!
//! ```text
//! required|min:18|max:200|decimal:8:2
//! ```
//!
//! Parsing never fails and performs no trimming or type coercion: whatever
//! sits between the separators is handed unchanged to the registry, which is
//! where unknown identifiers and bad arguments are rejected.

use std::fmt;

/// One `identifier[:arg1:arg2...]` unit of a rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleToken {
    /// Rule identifier exactly as written, e.g. `alpha-num` or `alphaNum`.
    pub name: String,
    /// Positional arguments in declared order.
    pub args: Vec<String>,
}

impl RuleToken {
    /// Parses a single token; the first `:` segment is the identifier.
    pub fn parse(descriptor: &str) -> Self {
        let mut segments = descriptor.split(':');
        let name = segments.next().unwrap_or_default().to_owned();
        let args = segments.map(str::to_owned).collect();
        Self { name, args }
    }
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, ":{arg}")?;
        }
        Ok(())
    }
}

/// An ordered sequence of rule tokens for one field.
///
/// Order matters: it is both evaluation order and short-circuit order.
///
/// # Examples
///
/// ```
/// use gatekeep_validator::chain::RuleChain;
///
/// let chain = RuleChain::parse("min:18|max:200");
/// let names: Vec<_> = chain.iter().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, ["min", "max"]);
/// assert_eq!(chain.tokens()[0].args, ["18"]);
/// assert_eq!(chain.to_string(), "min:18|max:200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RuleChain {
    tokens: Vec<RuleToken>,
}

impl RuleChain {
    /// Splits `spec` on `|`, then each descriptor on `:`.
    pub fn parse(spec: &str) -> Self {
        Self {
            tokens: spec.split('|').map(RuleToken::parse).collect(),
        }
    }

    /// Returns the tokens in declared order.
    pub fn tokens(&self) -> &[RuleToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleChain {
    type Item = &'a RuleToken;
    type IntoIter = std::slice::Iter<'a, RuleToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<&str> for RuleChain {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Parses a raw rule-chain string. Shorthand for [`RuleChain::parse`].
pub fn parse_chain(spec: &str) -> RuleChain {
    RuleChain::parse(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(name: &str, args: &[&str]) -> RuleToken {
        RuleToken {
            name: name.to_owned(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }

    #[test]
    fn parses_single_rule() {
        assert_eq!(parse_chain("required").tokens(), [token("required", &[])]);
    }

    #[test]
    fn parses_rules_and_arguments_in_order() {
        let chain = parse_chain("int|min:0|max:20|decimal:8:2");
        assert_eq!(
            chain.tokens(),
            [
                token("int", &[]),
                token("min", &["0"]),
                token("max", &["20"]),
                token("decimal", &["8", "2"]),
            ]
        );
    }

    #[test]
    fn does_not_trim_or_coerce() {
        let chain = parse_chain(" min : 18 |max:");
        assert_eq!(chain.tokens(), [token(" min ", &[" 18 "]), token("max", &[""])]);
    }

    #[test]
    fn empty_segments_become_empty_identifiers() {
        let chain = parse_chain("required||alpha");
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.tokens()[1], token("", &[]));
    }

    #[test]
    fn display_round_trips() {
        let spec = "required|equal:a:b|alpha-num";
        assert_eq!(parse_chain(spec).to_string(), spec);
    }
}

//! Header value predicates.

use regex::Regex;

/// One member of a field's validator set.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Value must equal this string.
    Exact(String),
    /// Pattern must match the whole value.
    Pattern(Regex),
    /// Custom predicate over the raw value.
    Check(fn(&str) -> bool),
}

impl Validator {
    /// Builds an exact-match validator.
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    /// Compiles a pattern validator anchored to the whole value.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!("^(?:{pattern})$")).map(Self::Pattern)
    }

    /// Returns true when `value` satisfies this validator.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == value,
            Self::Pattern(re) => re.is_match(value),
            Self::Check(check) => check(value),
        }
    }
}

/// Returns true when `value` matches any member of `validators`.
///
/// An empty set accepts every value.
pub fn validate(value: &str, validators: &[Validator]) -> bool {
    validators.is_empty() || validators.iter().any(|v| v.matches(value))
}

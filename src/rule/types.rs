//! Production-rule data model
//!
//! A rule is an ordered list of AND-ed equality conditions and a single
//! conclusion. Condition order carries no evaluation semantics but decides
//! which missing variable is reported first (left-to-right scan).
//!
//! Canonical text form:
//!
//! ```text
//! IF var1=value1 AND var2=value2 THEN var3=value3
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `variable=value` equality test (or assertion, when used as a
/// conclusion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Variable name
    pub variable: String,
    /// Expected (or asserted) value
    pub value: String,
}

impl Condition {
    /// Create a new condition
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.variable, self.value)
    }
}

/// A production rule: `IF c1 AND c2 ... THEN conclusion`.
///
/// Immutable once constructed. Always has at least one condition and
/// exactly one conclusion; the constructor enforces the condition count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    conditions: Vec<Condition>,
    conclusion: Condition,
}

impl Rule {
    /// Create a new rule.
    ///
    /// Returns `None` if `conditions` is empty; a rule without conditions
    /// would fire unconditionally and is rejected at parse time.
    pub fn new(conditions: Vec<Condition>, conclusion: Condition) -> Option<Self> {
        if conditions.is_empty() {
            return None;
        }
        Some(Self {
            conditions,
            conclusion,
        })
    }

    /// Ordered AND-ed conditions
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The single conclusion asserted when all conditions hold
    pub fn conclusion(&self) -> &Condition {
        &self.conclusion
    }
}

impl fmt::Display for Rule {
    /// Formats the rule in canonical syntax.
    ///
    /// Round trip: the output of this impl is always accepted by
    /// `RuleParser::parse` and reproduces an equal rule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        for (i, cond) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", cond)?;
        }
        write!(f, " THEN {}", self.conclusion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_requires_condition() {
        assert!(Rule::new(vec![], Condition::new("b", "2")).is_none());
    }

    #[test]
    fn test_rule_display_canonical() {
        let rule = Rule::new(
            vec![Condition::new("a", "1"), Condition::new("b", "2")],
            Condition::new("c", "3"),
        )
        .unwrap();
        assert_eq!(rule.to_string(), "IF a=1 AND b=2 THEN c=3");
    }

    #[test]
    fn test_single_condition_display() {
        let rule = Rule::new(vec![Condition::new("a", "1")], Condition::new("b", "2")).unwrap();
        assert_eq!(rule.to_string(), "IF a=1 THEN b=2");
    }
}

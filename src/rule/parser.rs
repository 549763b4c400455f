//! Rule-line parser
//!
//! Accepts the canonical line syntax:
//!
//! ```text
//! IF var1=value1 AND var2=value2 THEN var3=value3
//! ```
//!
//! - Conditions are separated by ` AND `.
//! - Each condition and the conclusion must contain exactly one `=`.
//! - Surrounding whitespace around variables and values is trimmed.
//!
//! Parsing is strict: a rule with any malformed condition, a malformed
//! conclusion, or an empty premise is rejected as a whole.

use regex::Regex;

use super::errors::{RuleError, RuleResult};
use super::types::{Condition, Rule};

/// Parser for the line-oriented rule syntax.
///
/// Holds the compiled premise/conclusion regex; construct once and reuse
/// across lines.
pub struct RuleParser {
    shape: Regex,
}

impl RuleParser {
    /// Create a new parser.
    pub fn new() -> Self {
        // The pattern cannot fail to compile; unwrap is safe for a literal.
        let shape = Regex::new(r"^IF\s+(.+)\s+THEN\s+(.+)$").expect("valid rule regex");
        Self { shape }
    }

    /// Parse one rule line.
    pub fn parse(&self, line: &str) -> RuleResult<Rule> {
        let caps = self
            .shape
            .captures(line.trim())
            .ok_or_else(|| RuleError::MalformedRule(line.to_string()))?;

        let premise = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let conclusion_str = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let mut conditions = Vec::new();
        for part in premise.split(" AND ") {
            conditions.push(Self::parse_pair(part).map_err(|_| {
                RuleError::MalformedCondition(part.trim().to_string())
            })?);
        }

        let conclusion = Self::parse_pair(conclusion_str)
            .map_err(|_| RuleError::MalformedConclusion(conclusion_str.trim().to_string()))?;

        Rule::new(conditions, conclusion)
            .ok_or_else(|| RuleError::NoConditions(line.to_string()))
    }

    /// Parse a single `variable=value` pair with exactly one `=`.
    fn parse_pair(text: &str) -> Result<Condition, ()> {
        let mut parts = text.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(var), Some(val), None) => {
                let var = var.trim();
                let val = val.trim();
                if var.is_empty() || val.is_empty() {
                    return Err(());
                }
                Ok(Condition::new(var, val))
            }
            _ => Err(()),
        }
    }
}

impl Default for RuleParser {
    fn default() -> Self {
        Self::new()
    }
}

//! # Rule Errors
//!
//! Error types for rule parsing and persistence.

use thiserror::Error;

/// Result type for rule operations
pub type RuleResult<T> = Result<T, RuleError>;

/// Rule parsing and persistence errors
#[derive(Debug, Error)]
pub enum RuleError {
    /// Line does not match the `IF ... THEN ...` shape
    #[error("Malformed rule (expected 'IF ... THEN ...'): {0}")]
    MalformedRule(String),

    /// A condition is not a single `variable=value` pair
    #[error("Malformed condition (expected 'variable=value'): {0}")]
    MalformedCondition(String),

    /// The conclusion is not a single `variable=value` pair
    #[error("Malformed conclusion (expected 'variable=value'): {0}")]
    MalformedConclusion(String),

    /// The premise contains no conditions
    #[error("Rule has no conditions: {0}")]
    NoConditions(String),

    /// Rule number out of range for delete
    #[error("No rule with number {0}")]
    UnknownRuleNumber(usize),

    /// Rule file could not be read or written
    #[error("Rule file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

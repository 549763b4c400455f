//! Rule applicability checks
//!
//! Two queries over one rule and the current session:
//!
//! - strict check: every condition variable bound to exactly the
//!   condition's value
//! - check-with-missing: left-to-right scan that short-circuits on the
//!   first *missing* variable, before evaluating later conditions
//!
//! Precedence matters: a missing variable earlier in the premise wins over
//! a mismatch later in the premise, because the missing variable is
//! actionable (it can be asked for) while a mismatch is not.

use crate::rule::Rule;

use super::session::Session;

/// Outcome of `check_with_missing` for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applicability {
    /// All conditions satisfied; the rule may fire.
    Applicable,
    /// The first unbound condition variable, scanning left to right.
    BlockedByMissing(String),
    /// An already-bound variable disagrees with a condition.
    ///
    /// Carries no variable: there is nothing to resolve.
    BlockedByMismatch,
}

/// Strict satisfiability: all conditions bound and matching.
pub fn check_strict(rule: &Rule, session: &Session) -> bool {
    rule.conditions()
        .iter()
        .all(|cond| session.get(&cond.variable) == Some(cond.value.as_str()))
}

/// Left-to-right applicability scan reporting the first missing variable.
pub fn check_with_missing(rule: &Rule, session: &Session) -> Applicability {
    for cond in rule.conditions() {
        match session.get(&cond.variable) {
            None => return Applicability::BlockedByMissing(cond.variable.clone()),
            Some(bound) if bound != cond.value => return Applicability::BlockedByMismatch,
            Some(_) => {}
        }
    }
    Applicability::Applicable
}

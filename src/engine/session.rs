//! Diagnostic session state
//!
//! One `Session` owns everything mutable about a diagnostic run: the
//! working memory (variable → value facts) and the set of variables the
//! operator declined to supply. Both are cleared together through the
//! single `reset` entry point at session start; nothing here persists
//! across runs.
//!
//! Working memory never silently overwrites: `bind` refuses a variable
//! that is already bound, and callers treat a disagreeing re-bind attempt
//! as a conflict. Facts keep their insertion order for the human-readable
//! trace.

use std::collections::{HashMap, HashSet};

/// Mutable state for one diagnostic session.
#[derive(Debug, Default)]
pub struct Session {
    facts: HashMap<String, String>,
    order: Vec<String>,
    skipped: HashSet<String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear working memory and the skipped set.
    pub fn reset(&mut self) {
        self.facts.clear();
        self.order.clear();
        self.skipped.clear();
    }

    /// Bind a variable to a value.
    ///
    /// Returns `true` if the variable was unbound and is now bound;
    /// `false` if it was already bound (the existing value is kept).
    pub fn bind(&mut self, variable: &str, value: &str) -> bool {
        if self.facts.contains_key(variable) {
            return false;
        }
        self.facts.insert(variable.to_string(), value.to_string());
        self.order.push(variable.to_string());
        true
    }

    /// Current value of a variable, if bound.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.facts.get(variable).map(String::as_str)
    }

    /// Whether a variable is bound.
    pub fn is_bound(&self, variable: &str) -> bool {
        self.facts.contains_key(variable)
    }

    /// Mark a variable as skipped for the rest of the session.
    pub fn skip(&mut self, variable: &str) {
        self.skipped.insert(variable.to_string());
    }

    /// Whether the operator declined (or policy excluded) this variable.
    pub fn is_skipped(&self, variable: &str) -> bool {
        self.skipped.contains(variable)
    }

    /// Facts in insertion order.
    pub fn facts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(move |var| {
            self.facts
                .get(var)
                .map(|val| (var.as_str(), val.as_str()))
        })
    }

    /// Number of bound facts.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no fact is bound.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

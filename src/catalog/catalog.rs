//! Catalog construction and lookup
//!
//! The catalog is a snapshot: it is rebuilt from scratch whenever the rule
//! base changes (load, add, delete) and is never mutated incrementally.
//! Building is idempotent; the same rule base always yields the same
//! catalog, with variables and value lists in lexicographic order.

use std::collections::{BTreeMap, BTreeSet};

use crate::rule::Rule;

/// Sorted index of condition variables to their distinct observed values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableCatalog {
    options: BTreeMap<String, Vec<String>>,
}

impl VariableCatalog {
    /// Build a catalog from the rule base.
    ///
    /// Only condition variables contribute; conclusion-only variables (such
    /// as the reserved problem/solution variables) never get catalog
    /// entries and therefore never get multiple-choice prompts.
    pub fn build(rules: &[Rule]) -> Self {
        let mut sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for rule in rules {
            for cond in rule.conditions() {
                sets.entry(cond.variable.clone())
                    .or_default()
                    .insert(cond.value.clone());
            }
        }

        let options = sets
            .into_iter()
            .map(|(var, vals)| (var, vals.into_iter().collect()))
            .collect();

        Self { options }
    }

    /// Force a value into an existing variable's candidate list.
    ///
    /// Used for the self-terminating indicator: its "normal" value must be
    /// offerable even when no rule conditions on it, so the operator can
    /// always declare the normal case. A variable that appears in no
    /// condition at all is left untouched; it has no catalog entry to
    /// augment.
    pub fn with_forced_value(mut self, variable: &str, value: &str) -> Self {
        if let Some(values) = self.options.get_mut(variable) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
                values.sort();
            }
        }
        self
    }

    /// Candidate values for a variable, sorted, if it has any.
    pub fn candidates(&self, variable: &str) -> Option<&[String]> {
        self.options.get(variable).map(|v| v.as_slice())
    }

    /// Whether the variable has catalog entries.
    pub fn contains(&self, variable: &str) -> bool {
        self.options.contains_key(variable)
    }

    /// All cataloged variables with their value lists, in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of cataloged variables.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True if no variable is cataloged.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

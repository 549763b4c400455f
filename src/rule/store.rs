//! File-backed rule store
//!
//! Rules live in a UTF-8 text file, one canonical rule line per file line.
//! Blank lines and lines starting with `#` are ignored. A line that fails
//! to parse is reported and skipped; the store keeps loading the rest.
//!
//! A missing rule file is not an error: it is created empty, matching the
//! behavior operators expect on first run.
//!
//! Every mutation (add, delete) rewrites the whole file in canonical
//! syntax, so the on-disk order always equals the in-memory priority order.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{RuleError, RuleResult};
use super::parser::RuleParser;
use super::types::Rule;

/// Result of loading a rule file: what loaded, what was rejected.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Number of rules loaded
    pub loaded: usize,
    /// Rejected lines: (1-based line number, offending line, reason)
    pub malformed: Vec<(usize, String, RuleError)>,
}

/// File-backed rule store with an in-memory rule base.
///
/// The in-memory `Vec<Rule>` order is the rule priority order used by the
/// inference engine.
pub struct RuleStore {
    path: PathBuf,
    parser: RuleParser,
    rules: Vec<Rule>,
}

impl RuleStore {
    /// Open a rule store, loading all rules from `path`.
    ///
    /// Creates an empty rule file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> RuleResult<(Self, LoadOutcome)> {
        let path = path.into();
        let mut store = Self {
            path,
            parser: RuleParser::new(),
            rules: Vec::new(),
        };
        let outcome = store.load()?;
        Ok((store, outcome))
    }

    /// Path of the backing rule file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rule base in priority (file) order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Reload the rule base from disk, replacing in-memory rules.
    pub fn load(&mut self) -> RuleResult<LoadOutcome> {
        if !self.path.exists() {
            // First run: create the file so later saves cannot surprise.
            fs::write(&self.path, "")?;
            self.rules = Vec::new();
            return Ok(LoadOutcome::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut rules = Vec::new();
        let mut outcome = LoadOutcome::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match self.parser.parse(line) {
                Ok(rule) => rules.push(rule),
                Err(e) => outcome.malformed.push((idx + 1, line.to_string(), e)),
            }
        }

        outcome.loaded = rules.len();
        self.rules = rules;
        Ok(outcome)
    }

    /// Persist the in-memory rule base, one canonical line per rule.
    pub fn save(&self) -> RuleResult<()> {
        let mut content = String::new();
        for rule in &self.rules {
            content.push_str(&rule.to_string());
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Parse and append a rule line, then persist.
    ///
    /// Returns the parsed rule in canonical form.
    pub fn add_line(&mut self, line: &str) -> RuleResult<Rule> {
        let rule = self.parser.parse(line)?;
        self.add(rule.clone())?;
        Ok(rule)
    }

    /// Append a rule, then persist.
    pub fn add(&mut self, rule: Rule) -> RuleResult<()> {
        self.rules.push(rule);
        self.save()
    }

    /// Delete the rule with the given 1-based number, then persist.
    pub fn delete(&mut self, number: usize) -> RuleResult<Rule> {
        if number == 0 || number > self.rules.len() {
            return Err(RuleError::UnknownRuleNumber(number));
        }
        let rule = self.rules.remove(number - 1);
        self.save()?;
        Ok(rule)
    }
}

//! Observable lifecycle events for FaultWise
//!
//! Events are explicit and typed; the string form is the `event` field of
//! the structured log line.

use std::fmt;

/// Observable events over the rule base and diagnostic sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Rule base lifecycle
    /// Rule file loaded
    RulesLoaded,
    /// A rule line was rejected at load or authoring time
    RuleRejected,
    /// A rule was added and persisted
    RuleAdded,
    /// A rule was deleted and the file rewritten
    RuleDeleted,

    // Diagnostic session lifecycle
    /// Session state reset, inference begins
    SessionStart,
    /// A rule fired and bound its conclusion
    FactDerived,
    /// The operator supplied a missing fact
    FactEntered,
    /// A rule disagreed with an existing fact
    Conflict,
    /// A variable joined the skipped set
    VariableSkipped,
    /// The problem variable was bound
    DiagnosisReached,
    /// The session ended without a diagnosis
    SessionStalled,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RulesLoaded => "RULES_LOADED",
            Event::RuleRejected => "RULE_REJECTED",
            Event::RuleAdded => "RULE_ADDED",
            Event::RuleDeleted => "RULE_DELETED",
            Event::SessionStart => "SESSION_START",
            Event::FactDerived => "FACT_DERIVED",
            Event::FactEntered => "FACT_ENTERED",
            Event::Conflict => "CONFLICT",
            Event::VariableSkipped => "VARIABLE_SKIPPED",
            Event::DiagnosisReached => "DIAGNOSIS_REACHED",
            Event::SessionStalled => "SESSION_STALLED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

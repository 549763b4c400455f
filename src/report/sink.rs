//! Report types, the sink trait, and non-console sinks

use crate::observability::{Event, Logger, Severity};

/// One observable event inside a diagnostic session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReport {
    /// A rule fired and bound its conclusion.
    FactDerived { variable: String, value: String },
    /// The operator supplied a value for a missing variable.
    FactEntered { variable: String, value: String },
    /// A rule tried to re-bind a variable to a different value.
    Conflict {
        variable: String,
        existing: String,
        attempted: String,
    },
    /// A variable joined the skipped set.
    VariableSkipped { variable: String },
}

/// Receives session reports.
pub trait ReportSink {
    /// Accept one report.
    fn report(&mut self, report: &SessionReport);
}

/// Sink that remembers every report, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Vec<SessionReport>,
}

impl RecordingReporter {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports in emission order.
    pub fn reports(&self) -> &[SessionReport] {
        &self.reports
    }

    /// Derived facts in emission order, as (variable, value) pairs.
    pub fn derived(&self) -> Vec<(&str, &str)> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                SessionReport::FactDerived { variable, value } => {
                    Some((variable.as_str(), value.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Number of conflict reports.
    pub fn conflicts(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r, SessionReport::Conflict { .. }))
            .count()
    }
}

impl ReportSink for RecordingReporter {
    fn report(&mut self, report: &SessionReport) {
        self.reports.push(report.clone());
    }
}

/// Sink that routes reports to the structured JSON logger.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporting sink.
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for JsonReporter {
    fn report(&mut self, report: &SessionReport) {
        match report {
            SessionReport::FactDerived { variable, value } => Logger::log(
                Severity::Info,
                Event::FactDerived.as_str(),
                &[("variable", variable), ("value", value)],
            ),
            SessionReport::FactEntered { variable, value } => Logger::log(
                Severity::Info,
                Event::FactEntered.as_str(),
                &[("variable", variable), ("value", value)],
            ),
            SessionReport::Conflict {
                variable,
                existing,
                attempted,
            } => Logger::log(
                Severity::Warn,
                Event::Conflict.as_str(),
                &[
                    ("attempted", attempted),
                    ("existing", existing),
                    ("variable", variable),
                ],
            ),
            SessionReport::VariableSkipped { variable } => Logger::log(
                Severity::Info,
                Event::VariableSkipped.as_str(),
                &[("variable", variable)],
            ),
        }
    }
}

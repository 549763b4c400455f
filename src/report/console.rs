//! Console reporting sink
//!
//! Human-readable one-line notifications, phrased the way operators see
//! them during an interactive session.

use super::sink::{ReportSink, SessionReport};

/// Sink that prints reports to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a new console sink.
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleReporter {
    fn report(&mut self, report: &SessionReport) {
        match report {
            SessionReport::FactDerived { variable, value } => {
                println!("Derived new fact: {} = {}", variable, value);
            }
            SessionReport::FactEntered { variable, value } => {
                println!("Added fact: {} = {}", variable, value);
            }
            SessionReport::Conflict {
                variable,
                existing,
                attempted,
            } => {
                println!(
                    "Conflict: {} already has value {}, but a rule attempts to set {}",
                    variable, existing, attempted
                );
            }
            SessionReport::VariableSkipped { variable } => {
                println!("Skipping variable {}", variable);
            }
        }
    }
}

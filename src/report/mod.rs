//! Session reporting for FaultWise
//!
//! The engine emits typed reports (derived facts, conflicts, skip
//! decisions) through a `ReportSink`. Reports are observational side
//! effects, not part of the inference contract: the CLI installs a console
//! sink, tests install a recording sink, and a JSON sink routes reports to
//! the structured logger.

mod console;
mod sink;

pub use console::ConsoleReporter;
pub use sink::{JsonReporter, RecordingReporter, ReportSink, SessionReport};

//! Inference engine for FaultWise
//!
//! The core of the system: a forward-chaining fixed point over the rule
//! base against one session's working memory.
//!
//! Provides:
//! - config: reserved-variable names, indicator close-out, iteration bound
//! - session: working memory + skipped-variable set with one reset point
//! - check: rule applicability queries (strict, check-with-missing)
//! - resolution: missing-fact resolution policy (single-variable + broad)
//! - engine: the bounded fixed-point driver
//! - errors: engine error types

mod check;
mod config;
mod engine;
mod errors;
mod resolution;
mod session;

pub use check::{check_strict, check_with_missing, Applicability};
pub use config::EngineConfig;
pub use engine::{InferenceEngine, SessionOutcome};
pub use errors::{EngineError, EngineResult};
pub use session::Session;

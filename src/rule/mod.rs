//! Rule subsystem for FaultWise
//!
//! Provides:
//! - types: the production-rule data model (conditions + conclusion)
//! - parser: the line-oriented `IF ... THEN ...` rule syntax
//! - store: file-backed rule persistence (load, save, add, delete)
//! - errors: rule parsing and persistence error types

mod errors;
mod parser;
mod store;
mod types;

pub use errors::{RuleError, RuleResult};
pub use parser::RuleParser;
pub use store::{LoadOutcome, RuleStore};
pub use types::{Condition, Rule};

//! faultwise - A rule-based diagnostic advisor
//!
//! A forward-chaining inference engine over `IF ... THEN ...` production
//! rules: given a growing set of known facts it derives new ones until a
//! terminal diagnosis is reached or nothing more can be inferred, asking
//! the operator for missing facts along the way.

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod observability;
pub mod report;
pub mod resolve;
pub mod rule;

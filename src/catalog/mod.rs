//! Variable catalog for FaultWise
//!
//! A derived, read-only index over the rule base: for every variable used
//! in any rule condition, the sorted set of distinct values it is tested
//! against. Drives multiple-choice prompting during fact resolution.

mod catalog;

pub use catalog::VariableCatalog;

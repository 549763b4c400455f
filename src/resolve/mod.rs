//! Fact resolution boundary for FaultWise
//!
//! The engine never reads the console. When it needs a value for a
//! variable it hands a `ResolveRequest` (variable name plus any catalog
//! candidates) to a `FactResolver`, and gets back a `Resolution`. The
//! console implementation talks to the operator; the scripted
//! implementation replays canned answers for deterministic tests.

mod console;
mod errors;
mod resolver;
mod scripted;

pub use console::ConsoleResolver;
pub use errors::{ResolveError, ResolveResult};
pub use resolver::{FactResolver, Resolution, ResolveRequest};
pub use scripted::ScriptedResolver;

//! CLI module for FaultWise
//!
//! Provides the command-line interface for:
//! - diagnose: run one interactive diagnostic session
//! - rules list: show the rule base in priority order
//! - rules add: author and persist a new rule interactively
//! - rules delete: remove a rule by number

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, RulesAction};
pub use commands::{diagnose, rules_add, rules_delete, rules_list, run, run_command, Config};
pub use errors::{CliError, CliResult};
pub use io::{prompt, prompt_choice};

//! CLI argument definitions using clap
//!
//! Commands:
//! - faultwise diagnose [--config <path>] [--rules <path>] [--json]
//! - faultwise rules list [--verbose]
//! - faultwise rules add
//! - faultwise rules delete <number>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FaultWise - A rule-based diagnostic advisor
#[derive(Parser, Debug)]
#[command(name = "faultwise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one interactive diagnostic session
    Diagnose {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Rule file, overriding the configured path
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Emit session reports as structured JSON log lines
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the rule base
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum RulesAction {
    /// List rules in priority order
    List {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Rule file, overriding the configured path
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Also list every condition variable's known values
        #[arg(short, long)]
        verbose: bool,
    },

    /// Author a new rule interactively and persist it
    Add {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Rule file, overriding the configured path
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Delete the rule with the given 1-based number
    Delete {
        /// Rule number as shown by `rules list`
        number: usize,

        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Rule file, overriding the configured path
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

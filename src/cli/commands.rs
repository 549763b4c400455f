//! CLI command implementations
//!
//! The CLI is a thin shell over the library: it loads configuration and
//! the rule base, wires the engine to the console resolver and a report
//! sink, and formats the outcome for the operator. No inference decision
//! lives here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::VariableCatalog;
use crate::engine::{EngineConfig, InferenceEngine, Session, SessionOutcome};
use crate::observability::{Event, Logger};
use crate::report::{ConsoleReporter, JsonReporter, ReportSink};
use crate::resolve::ConsoleResolver;
use crate::rule::{LoadOutcome, RuleStore};

use super::args::{Command, RulesAction};
use super::errors::{CliError, CliResult};
use super::io::{prompt, prompt_choice};

/// JSON configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rule file path (default "rules.txt")
    #[serde(default = "default_rules_file")]
    pub rules_file: String,

    /// Conclusion-only variable marking the terminal diagnosis
    #[serde(default = "default_problem_variable")]
    pub problem_variable: String,

    /// Conclusion-only variable carrying the remedy
    #[serde(default = "default_solution_variable")]
    pub solution_variable: String,

    /// Self-terminating indicator variable
    #[serde(default = "default_indicator_variable")]
    pub indicator_variable: String,

    /// Indicator value meaning "normal, no symptom"
    #[serde(default = "default_indicator_normal_value")]
    pub indicator_normal_value: String,

    /// Variable asked up front before inference starts
    #[serde(default = "default_priming_variable")]
    pub priming_variable: String,

    /// Value assumed for the priming variable on unusable input
    #[serde(default = "default_priming_fallback_value")]
    pub priming_fallback_value: String,

    /// Outer-iteration safety bound
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_rules_file() -> String {
    "rules.txt".to_string()
}
fn default_problem_variable() -> String {
    "problem".to_string()
}
fn default_solution_variable() -> String {
    "solution".to_string()
}
fn default_indicator_variable() -> String {
    "monitor_display".to_string()
}
fn default_indicator_normal_value() -> String {
    "yes".to_string()
}
fn default_priming_variable() -> String {
    "computer_powers_on".to_string()
}
fn default_priming_fallback_value() -> String {
    "no".to_string()
}
fn default_max_iterations() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_file: default_rules_file(),
            problem_variable: default_problem_variable(),
            solution_variable: default_solution_variable(),
            indicator_variable: default_indicator_variable(),
            indicator_normal_value: default_indicator_normal_value(),
            priming_variable: default_priming_variable(),
            priming_fallback_value: default_priming_fallback_value(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl Config {
    /// Load configuration, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {:?}: {}", path, e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The engine view of this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            problem_variable: self.problem_variable.clone(),
            solution_variable: self.solution_variable.clone(),
            indicator_variable: self.indicator_variable.clone(),
            indicator_normal_value: self.indicator_normal_value.clone(),
            max_iterations: self.max_iterations,
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Diagnose {
            config,
            rules,
            json,
        } => diagnose(config.as_deref(), rules, json),
        Command::Rules { action } => match action {
            RulesAction::List {
                config,
                rules,
                verbose,
            } => rules_list(config.as_deref(), rules, verbose),
            RulesAction::Add { config, rules } => rules_add(config.as_deref(), rules),
            RulesAction::Delete {
                number,
                config,
                rules,
            } => rules_delete(config.as_deref(), rules, number),
        },
    }
}

/// Open the rule store and report rejected lines to the operator.
fn open_store(config: &Config, rules_override: Option<PathBuf>) -> CliResult<RuleStore> {
    let path = rules_override.unwrap_or_else(|| PathBuf::from(&config.rules_file));
    let (store, outcome) = RuleStore::open(path)?;
    report_malformed(&outcome);
    Ok(store)
}

fn report_malformed(outcome: &LoadOutcome) {
    for (line_number, line, error) in &outcome.malformed {
        println!("Malformed rule skipped (line {}): {} ({})", line_number, line, error);
    }
}

/// Build the catalog for a store, with the indicator augmentation applied.
fn build_catalog(store: &RuleStore, config: &Config) -> VariableCatalog {
    VariableCatalog::build(store.rules())
        .with_forced_value(&config.indicator_variable, &config.indicator_normal_value)
}

fn print_facts(session: &Session) {
    println!("\nCurrent facts:");
    if session.is_empty() {
        println!("No facts.");
        return;
    }
    for (variable, value) in session.facts() {
        println!("{} = {}", variable, value);
    }
}

/// Ask the priming question before inference starts.
///
/// A selection binds the priming variable; unusable input falls back to
/// the configured default so the session always starts with an answer.
fn ask_priming_question(
    session: &mut Session,
    catalog: &VariableCatalog,
    config: &Config,
) -> CliResult<()> {
    let Some(options) = catalog.candidates(&config.priming_variable) else {
        return Ok(());
    };

    println!("\nTo begin the diagnosis, answer a few questions:");
    let title = format!("Select a value for {}:", config.priming_variable);
    match prompt_choice(&title, options)? {
        Some(value) => {
            session.bind(&config.priming_variable, value);
        }
        None => {
            println!(
                "Assuming the default value: {}",
                config.priming_fallback_value
            );
            session.bind(&config.priming_variable, &config.priming_fallback_value);
        }
    }
    Ok(())
}

/// Run one interactive diagnostic session
pub fn diagnose(
    config_path: Option<&Path>,
    rules_override: Option<PathBuf>,
    json: bool,
) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = open_store(&config, rules_override)?;
    let catalog = build_catalog(&store, &config);
    let engine_config = config.engine_config();

    if json {
        let count = store.rules().len().to_string();
        Logger::info(Event::RulesLoaded.as_str(), &[("rules", count.as_str())]);
    }

    let mut session = Session::new();
    session.reset();
    ask_priming_question(&mut session, &catalog, &config)?;

    println!("\nStarting diagnosis...");
    print_facts(&session);
    if json {
        Logger::info(Event::SessionStart.as_str(), &[]);
    }

    let engine = InferenceEngine::new(store.rules(), &catalog, &engine_config);
    let mut resolver = ConsoleResolver::new();
    let mut sink: Box<dyn ReportSink> = if json {
        Box::new(JsonReporter::new())
    } else {
        Box::new(ConsoleReporter::new())
    };

    let outcome = engine.run_session(&mut session, &mut resolver, sink.as_mut())?;

    println!("\nDiagnosis complete!");
    match outcome {
        SessionOutcome::DiagnosisReached => {
            if json {
                Logger::info(Event::DiagnosisReached.as_str(), &[]);
            }
            // DiagnosisReached guarantees the problem variable is bound.
            if let Some(problem) = session.get(&config.problem_variable) {
                println!("\nIdentified problem: {}", problem);
            }
            if let Some(solution) = session.get(&config.solution_variable) {
                println!("Recommended solution: {}", solution);
            }
        }
        SessionOutcome::Stalled | SessionOutcome::IterationLimit => {
            if json {
                Logger::info(Event::SessionStalled.as_str(), &[]);
            }
            println!("\nNo specific problem was identified.");
            println!("Possible reasons:");
            println!("- The computer is working normally");
            println!("- The problem is not described in the knowledge base");
            println!("Contact a service center for professional diagnostics.");
        }
    }
    print_facts(&session);

    Ok(())
}

/// List rules in priority order
pub fn rules_list(
    config_path: Option<&Path>,
    rules_override: Option<PathBuf>,
    verbose: bool,
) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = open_store(&config, rules_override)?;

    println!("Rule base:");
    if store.rules().is_empty() {
        println!("No rules.");
    }
    for (i, rule) in store.rules().iter().enumerate() {
        println!("{}. {}", i + 1, rule);
    }

    if verbose {
        let catalog = build_catalog(&store, &config);
        println!("\nKnown values of condition variables:");
        for (variable, values) in catalog.entries() {
            println!("{}: {}", variable, values.join(", "));
        }
    }

    Ok(())
}

/// Author a new rule interactively and persist it
pub fn rules_add(config_path: Option<&Path>, rules_override: Option<PathBuf>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let mut store = open_store(&config, rules_override)?;
    let catalog = build_catalog(&store, &config);

    println!("\nAdding a new rule");
    println!("Format: IF condition1=value1 AND condition2=value2 THEN conclusion=value");

    let mut conditions = Vec::new();
    loop {
        let variable = prompt("Enter a condition variable (or press Enter to finish): ")?;
        if variable.is_empty() {
            break;
        }
        if let Some(values) = catalog.candidates(&variable) {
            println!("Possible values for {}: {}", variable, values.join(", "));
        }
        let value = prompt("Enter the condition value: ")?;
        conditions.push(format!("{}={}", variable, value));
    }

    if conditions.is_empty() {
        println!("At least one condition is required!");
        return Ok(());
    }

    let conclusion_variable = prompt("Enter the conclusion variable: ")?;
    let conclusion_value = prompt("Enter the conclusion value: ")?;

    let line = format!(
        "IF {} THEN {}={}",
        conditions.join(" AND "),
        conclusion_variable,
        conclusion_value
    );

    match store.add_line(&line) {
        Ok(rule) => {
            println!("Rule added successfully: {}", rule);
            Ok(())
        }
        Err(e) => {
            // Authoring mistakes are reported, not fatal.
            println!("Rule rejected: {}", e);
            Ok(())
        }
    }
}

/// Delete the rule with the given 1-based number
pub fn rules_delete(
    config_path: Option<&Path>,
    rules_override: Option<PathBuf>,
    number: usize,
) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let mut store = open_store(&config, rules_override)?;

    let rule = store.delete(number)?;
    println!("Rule deleted: {}", rule);
    Ok(())
}

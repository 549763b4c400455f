//! Engine configuration
//!
//! Reserved-variable names are configuration, not hard-coded domain
//! strings:
//! - the problem variable terminates a session when bound
//! - the solution variable supplies the remedy for a derived problem
//! - the self-terminating indicator is closed out (added to the skipped
//!   set) once it resolves to its "normal" value
//!
//! Defaults target the computer-fault diagnostic domain the shipped rule
//! base covers.

/// Configuration for one inference engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Conclusion-only variable whose binding means "diagnosis reached".
    pub problem_variable: String,
    /// Conclusion-only variable carrying the remedy for the problem.
    pub solution_variable: String,
    /// Self-terminating indicator variable.
    pub indicator_variable: String,
    /// The indicator value meaning "normal, no symptom".
    pub indicator_normal_value: String,
    /// Outer-iteration safety bound against cyclic rule bases.
    pub max_iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            problem_variable: "problem".to_string(),
            solution_variable: "solution".to_string(),
            indicator_variable: "monitor_display".to_string(),
            indicator_normal_value: "yes".to_string(),
            max_iterations: 20,
        }
    }
}

impl EngineConfig {
    /// Whether `variable` is reserved (conclusion-only, never prompted).
    pub fn is_reserved(&self, variable: &str) -> bool {
        variable == self.problem_variable || variable == self.solution_variable
    }

    /// Whether `variable` is the self-terminating indicator.
    pub fn is_indicator(&self, variable: &str) -> bool {
        variable == self.indicator_variable
    }
}

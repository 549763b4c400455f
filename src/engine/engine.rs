//! Forward-chaining fixed-point driver
//!
//! Inference flow (strict order):
//! 1. Scan the rule base in priority order with check-with-missing
//! 2. Fire the first applicable rule with an unbound conclusion
//! 3. Conflicting conclusions are reported, never applied
//! 4. A blocking missing variable triggers single-variable resolution
//! 5. Any progress restarts the scan from the top of the rule base
//! 6. A scan with no progress falls back to the broad resolution pass
//! 7. No progress anywhere, or the iteration bound, ends the session
//!
//! The driver is deterministic: a fixed rule base and a fixed sequence of
//! resolver answers always produce the same working memory and the same
//! report order.

use crate::catalog::VariableCatalog;
use crate::report::{ReportSink, SessionReport};
use crate::resolve::FactResolver;
use crate::rule::Rule;

use super::check::{check_with_missing, Applicability};
use super::config::EngineConfig;
use super::errors::EngineResult;
use super::resolution::{broad_resolution, resolve_single, FallbackOutcome};
use super::session::Session;

/// How a diagnostic session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The problem variable was bound: diagnosis reached.
    DiagnosisReached,
    /// A full scan plus the fallback pass made no progress.
    Stalled,
    /// The outer-iteration safety bound was hit (cyclic rule base).
    ///
    /// Reported to the operator identically to `Stalled`.
    IterationLimit,
}

impl SessionOutcome {
    /// Whether the session ended with a diagnosis.
    pub fn is_diagnosis(&self) -> bool {
        matches!(self, SessionOutcome::DiagnosisReached)
    }
}

/// Result of one scan attempt over the rule base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanOutcome {
    /// The problem variable was bound during this scan.
    Diagnosis,
    /// A fact was bound (rule fired or variable resolved); rescan.
    Progress,
    /// Nothing fired and no resolution bound a value.
    NoProgress,
}

/// Forward-chaining inference engine over a read-only rule base.
///
/// The engine owns no session state: the caller seeds and resets the
/// `Session`, so priming facts entered before the run are ordinary
/// working-memory entries.
pub struct InferenceEngine<'a> {
    rules: &'a [Rule],
    catalog: &'a VariableCatalog,
    config: &'a EngineConfig,
}

impl<'a> InferenceEngine<'a> {
    /// Create an engine over a rule base, its catalog, and a config.
    pub fn new(rules: &'a [Rule], catalog: &'a VariableCatalog, config: &'a EngineConfig) -> Self {
        Self {
            rules,
            catalog,
            config,
        }
    }

    /// Run one diagnostic session to completion.
    ///
    /// Mutates `session` with every derived and entered fact; returns how
    /// the session ended. The only propagated error is a broken operator
    /// channel.
    pub fn run_session(
        &self,
        session: &mut Session,
        resolver: &mut dyn FactResolver,
        sink: &mut dyn ReportSink,
    ) -> EngineResult<SessionOutcome> {
        for _ in 0..self.config.max_iterations {
            match self.scan_once(session, resolver, sink)? {
                ScanOutcome::Diagnosis => return Ok(SessionOutcome::DiagnosisReached),
                ScanOutcome::Progress => continue,
                ScanOutcome::NoProgress => {
                    let fallback = broad_resolution(
                        self.rules,
                        self.catalog,
                        self.config,
                        session,
                        resolver,
                        sink,
                    )?;
                    match fallback {
                        FallbackOutcome::Diagnosis => {
                            return Ok(SessionOutcome::DiagnosisReached)
                        }
                        FallbackOutcome::Progress => continue,
                        FallbackOutcome::NoProgress => return Ok(SessionOutcome::Stalled),
                    }
                }
            }
        }
        Ok(SessionOutcome::IterationLimit)
    }

    /// One pass over the rule base, ending at the first bound fact.
    ///
    /// Earliest-rule-wins: every time new evidence appears the scan
    /// restarts from rule 0, so rules earlier in the file are always
    /// preferred over later ones.
    fn scan_once(
        &self,
        session: &mut Session,
        resolver: &mut dyn FactResolver,
        sink: &mut dyn ReportSink,
    ) -> EngineResult<ScanOutcome> {
        for rule in self.rules {
            match check_with_missing(rule, session) {
                Applicability::Applicable => {
                    let conclusion = rule.conclusion();
                    let existing = session.get(&conclusion.variable).map(str::to_string);
                    match existing {
                        Some(existing) if existing != conclusion.value => {
                            // Conflict: report, keep the existing fact,
                            // keep scanning.
                            sink.report(&SessionReport::Conflict {
                                variable: conclusion.variable.clone(),
                                existing,
                                attempted: conclusion.value.clone(),
                            });
                        }
                        Some(_) => {
                            // Already bound to the same value: the rule
                            // adds nothing.
                        }
                        None => {
                            session.bind(&conclusion.variable, &conclusion.value);
                            sink.report(&SessionReport::FactDerived {
                                variable: conclusion.variable.clone(),
                                value: conclusion.value.clone(),
                            });
                            if conclusion.variable == self.config.problem_variable {
                                return Ok(ScanOutcome::Diagnosis);
                            }
                            return Ok(ScanOutcome::Progress);
                        }
                    }
                }
                Applicability::BlockedByMissing(variable)
                    if !session.is_skipped(&variable) =>
                {
                    let bound = resolve_single(
                        &variable,
                        self.catalog,
                        self.config,
                        session,
                        resolver,
                        sink,
                    )?;
                    if bound {
                        // A normal indicator reading closes the topic: the
                        // variable stays bound but is never revisited.
                        if self.config.is_indicator(&variable)
                            && session.get(&variable)
                                == Some(self.config.indicator_normal_value.as_str())
                        {
                            session.skip(&variable);
                        }
                        if session.is_bound(&self.config.problem_variable) {
                            return Ok(ScanOutcome::Diagnosis);
                        }
                        return Ok(ScanOutcome::Progress);
                    }
                    // Declined or invalid input: later rules still get
                    // their chance within this scan.
                }
                _ => {}
            }
        }
        Ok(ScanOutcome::NoProgress)
    }
}

//! Missing-fact resolution policy
//!
//! Two entry points, both pure policy over the resolver collaborator:
//!
//! - `resolve_single`: one variable blocking one rule. Reserved variables
//!   are auto-skipped without prompting; cataloged variables get their
//!   candidate list; the answer binds, skips, or does nothing.
//! - `broad_resolution`: the fallback pass when a full rule scan made no
//!   progress. First tries to fire any strictly applicable rule with an
//!   unbound conclusion, then harvests every unbound, unskipped condition
//!   variable and asks for each in turn until one binds.
//!
//! Harvest order is first-appearance order across the rule base (rule
//! order, then condition order), so identical sessions replay identically.

use std::collections::HashSet;

use crate::catalog::VariableCatalog;
use crate::report::{ReportSink, SessionReport};
use crate::resolve::{FactResolver, Resolution, ResolveRequest};
use crate::rule::Rule;

use super::check::check_strict;
use super::config::EngineConfig;
use super::errors::EngineResult;
use super::session::Session;

/// Outcome of the broad fallback pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FallbackOutcome {
    /// The opportunistic fire bound the problem variable.
    Diagnosis,
    /// A rule fired or a harvested variable was bound.
    Progress,
    /// Nothing to fire and nothing left to ask: natural termination.
    NoProgress,
}

/// Resolve one missing variable. Returns `true` iff a new fact was bound.
///
/// Policy:
/// - reserved (problem/solution) variables are conclusion-only: skipped
///   immediately, never prompted
/// - a supplied value binds verbatim and counts as progress
/// - a decline adds the variable to the skipped set
/// - unusable input changes nothing; the variable may be asked again later
pub(crate) fn resolve_single(
    variable: &str,
    catalog: &VariableCatalog,
    config: &EngineConfig,
    session: &mut Session,
    resolver: &mut dyn FactResolver,
    sink: &mut dyn ReportSink,
) -> EngineResult<bool> {
    if config.is_reserved(variable) {
        session.skip(variable);
        return Ok(false);
    }
    if session.is_bound(variable) || session.is_skipped(variable) {
        return Ok(false);
    }

    let request = ResolveRequest {
        variable,
        candidates: catalog.candidates(variable),
    };

    match resolver.resolve(&request)? {
        Resolution::Supplied(value) => {
            session.bind(variable, &value);
            sink.report(&SessionReport::FactEntered {
                variable: variable.to_string(),
                value,
            });
            Ok(true)
        }
        Resolution::Declined => {
            session.skip(variable);
            sink.report(&SessionReport::VariableSkipped {
                variable: variable.to_string(),
            });
            Ok(false)
        }
        Resolution::Invalid => Ok(false),
    }
}

/// Broad fallback pass: opportunistic fire, then harvest-and-ask.
pub(crate) fn broad_resolution(
    rules: &[Rule],
    catalog: &VariableCatalog,
    config: &EngineConfig,
    session: &mut Session,
    resolver: &mut dyn FactResolver,
    sink: &mut dyn ReportSink,
) -> EngineResult<FallbackOutcome> {
    // Phase 1: fire the first strictly applicable rule with an unbound
    // conclusion. Firing beats asking.
    for rule in rules {
        let conclusion = rule.conclusion();
        if session.is_bound(&conclusion.variable) {
            continue;
        }
        if check_strict(rule, session) {
            session.bind(&conclusion.variable, &conclusion.value);
            sink.report(&SessionReport::FactDerived {
                variable: conclusion.variable.clone(),
                value: conclusion.value.clone(),
            });
            if conclusion.variable == config.problem_variable {
                return Ok(FallbackOutcome::Diagnosis);
            }
            return Ok(FallbackOutcome::Progress);
        }
    }

    // Phase 2: harvest every condition variable that is neither bound nor
    // skipped, in first-appearance order.
    let mut seen = HashSet::new();
    let mut harvested = Vec::new();
    for rule in rules {
        for cond in rule.conditions() {
            if !session.is_bound(&cond.variable)
                && !session.is_skipped(&cond.variable)
                && seen.insert(cond.variable.clone())
            {
                harvested.push(cond.variable.clone());
            }
        }
    }

    for variable in &harvested {
        if resolve_single(variable, catalog, config, session, resolver, sink)? {
            return Ok(FallbackOutcome::Progress);
        }
        // Declined or invalid: move on to the next harvested variable.
    }

    Ok(FallbackOutcome::NoProgress)
}

//! Inference Engine Invariant Tests
//!
//! Tests for the forward-chaining fixed point:
//! - Facts are never overwritten; conflicts are reported and rejected
//! - Skipped variables are never prompted again in the same session
//! - The engine always halts within the iteration bound
//! - Reserved variables are produced only by rule conclusions

use faultwise::catalog::VariableCatalog;
use faultwise::engine::{EngineConfig, InferenceEngine, Session, SessionOutcome};
use faultwise::report::{RecordingReporter, SessionReport};
use faultwise::resolve::{Resolution, ScriptedResolver};
use faultwise::rule::{Rule, RuleParser};

// =============================================================================
// Helper Functions
// =============================================================================

fn rules(lines: &[&str]) -> Vec<Rule> {
    let parser = RuleParser::new();
    lines.iter().map(|l| parser.parse(l).unwrap()).collect()
}

struct Run {
    outcome: SessionOutcome,
    session: Session,
    sink: RecordingReporter,
    resolver: ScriptedResolver,
}

fn run_session(lines: &[&str], script: Vec<Resolution>, seed: &[(&str, &str)]) -> Run {
    let rules = rules(lines);
    let config = EngineConfig::default();
    let catalog = VariableCatalog::build(&rules)
        .with_forced_value(&config.indicator_variable, &config.indicator_normal_value);

    let mut session = Session::new();
    for (var, val) in seed {
        session.bind(var, val);
    }

    let mut resolver = ScriptedResolver::with_script(script);
    let mut sink = RecordingReporter::new();

    let engine = InferenceEngine::new(&rules, &catalog, &config);
    let outcome = engine
        .run_session(&mut session, &mut resolver, &mut sink)
        .unwrap();

    Run {
        outcome,
        session,
        sink,
        resolver,
    }
}

fn supplied(value: &str) -> Resolution {
    Resolution::Supplied(value.to_string())
}

// =============================================================================
// Specification Scenarios
// =============================================================================

/// Scenario A: a single rule plus an operator-supplied fact derives the
/// conclusion without reaching a diagnosis.
#[test]
fn test_scenario_simple_derivation() {
    let run = run_session(&["IF a=1 THEN b=2"], vec![supplied("1")], &[]);

    assert!(!run.outcome.is_diagnosis());
    assert_eq!(run.session.get("a"), Some("1"));
    assert_eq!(run.session.get("b"), Some("2"));
    assert_eq!(run.sink.derived(), vec![("b", "2")]);
}

/// Scenario B: a rule concluding the problem variable terminates the
/// session successfully.
#[test]
fn test_scenario_diagnosis_reached() {
    let run = run_session(&["IF a=1 THEN problem=X"], vec![supplied("1")], &[]);

    assert!(run.outcome.is_diagnosis());
    assert_eq!(run.session.get("problem"), Some("X"));
}

/// Scenario C: two rules disagreeing on the same conclusion variable; the
/// first wins, the second is reported as a conflict and rejected.
#[test]
fn test_scenario_conflicting_rules() {
    let run = run_session(
        &["IF a=1 THEN b=2", "IF a=1 THEN b=3"],
        vec![supplied("1")],
        &[],
    );

    assert_eq!(run.session.get("b"), Some("2"));
    assert!(run.sink.conflicts() >= 1);
    assert!(run.sink.reports().iter().any(|r| matches!(
        r,
        SessionReport::Conflict { variable, existing, attempted }
            if variable == "b" && existing == "2" && attempted == "3"
    )));
}

/// Scenario D: a variable the operator always declines; the engine must
/// terminate non-terminally instead of looping.
#[test]
fn test_scenario_unresolvable_variable() {
    let run = run_session(&["IF z=1 THEN problem=X"], vec![], &[]);

    assert!(!run.outcome.is_diagnosis());
    assert!(run.session.is_skipped("z"));
    // Declined once in the scan; the fallback harvest must not re-ask.
    assert_eq!(run.resolver.requests(), &["z"]);
}

// =============================================================================
// No-Overwrite Invariant
// =============================================================================

/// A bound fact survives every later rule firing attempt.
#[test]
fn test_facts_never_overwritten() {
    let run = run_session(
        &[
            "IF a=1 THEN b=2",
            "IF a=1 THEN b=3",
            "IF b=2 THEN c=4",
            "IF c=4 THEN b=9",
        ],
        vec![supplied("1")],
        &[],
    );

    assert_eq!(run.session.get("b"), Some("2"));
    assert_eq!(run.session.get("c"), Some("4"));
    // Both disagreeing rules were rejected.
    assert!(run.sink.conflicts() >= 2);
}

/// Re-deriving the same value is neither a firing nor a conflict.
#[test]
fn test_same_value_rederivation_is_silent() {
    let run = run_session(
        &["IF a=1 THEN b=2", "IF a=1 THEN b=2"],
        vec![supplied("1")],
        &[],
    );

    assert_eq!(run.sink.derived(), vec![("b", "2")]);
    assert_eq!(run.sink.conflicts(), 0);
}

// =============================================================================
// Skip Stability
// =============================================================================

/// One decline silences a variable for the whole session, across both the
/// rule scan and the fallback harvest.
#[test]
fn test_skip_is_session_wide() {
    let run = run_session(
        &["IF z=1 THEN b=2", "IF z=2 THEN c=3", "IF z=3 AND w=1 THEN d=4"],
        vec![Resolution::Declined, Resolution::Declined],
        &[],
    );

    assert!(!run.outcome.is_diagnosis());
    // z asked once, then w once; never z again.
    assert_eq!(run.resolver.requests(), &["z", "w"]);
}

/// Reserved variables are excluded from prompting entirely.
#[test]
fn test_reserved_variables_never_prompted() {
    let run = run_session(
        &["IF problem=X THEN solution=Y"],
        vec![supplied("should-not-be-consumed")],
        &[],
    );

    assert!(!run.outcome.is_diagnosis());
    assert!(run.resolver.requests().is_empty());
    assert!(run.session.is_skipped("problem"));
}

// =============================================================================
// Termination
// =============================================================================

/// A self-sustaining cycle that never derives the problem variable ends
/// non-terminally.
#[test]
fn test_cycle_terminates_non_terminally() {
    let run = run_session(
        &["IF a=1 THEN b=1", "IF b=1 THEN a=1"],
        vec![],
        &[("a", "1")],
    );

    assert!(!run.outcome.is_diagnosis());
}

/// A derivation chain longer than the iteration bound is cut off at the
/// bound and reported as a non-terminal end.
#[test]
fn test_iteration_bound_cuts_long_chains() {
    let mut lines = Vec::new();
    for i in 0..30 {
        lines.push(format!("IF v{}=1 THEN v{}=1", i, i + 1));
    }
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let run = run_session(&line_refs, vec![], &[("v0", "1")]);

    assert_eq!(run.outcome, SessionOutcome::IterationLimit);
    // Exactly one firing per outer iteration.
    assert_eq!(run.sink.derived().len(), 20);
    assert!(run.session.is_bound("v20"));
    assert!(!run.session.is_bound("v21"));
}

// =============================================================================
// Resolution Policy
// =============================================================================

/// The indicator variable, once normal, stays bound but closed.
#[test]
fn test_indicator_close_out() {
    let run = run_session(
        &[
            "IF monitor_display=no THEN problem=gpu",
            "IF monitor_display=artifacts THEN problem=vram",
        ],
        vec![supplied("yes")],
        &[],
    );

    assert!(!run.outcome.is_diagnosis());
    assert_eq!(run.session.get("monitor_display"), Some("yes"));
    assert!(run.session.is_skipped("monitor_display"));
    assert_eq!(run.resolver.requests(), &["monitor_display"]);
}

/// Invalid input leaves the variable eligible; a later pass can still
/// resolve it.
#[test]
fn test_invalid_input_then_retry() {
    let run = run_session(
        &["IF a=1 THEN problem=X"],
        vec![Resolution::Invalid, supplied("1")],
        &[],
    );

    assert!(run.outcome.is_diagnosis());
    assert_eq!(run.resolver.requests(), &["a", "a"]);
}

/// The fallback harvest reaches condition variables hidden behind a
/// skipped one, walking declines until an answer binds.
#[test]
fn test_harvest_walks_past_declines() {
    let run = run_session(
        &["IF a=1 AND b=2 AND c=3 THEN problem=X"],
        vec![Resolution::Declined, Resolution::Declined, supplied("3")],
        &[],
    );

    // The scan only ever sees "a" (first missing); "b" and "c" are
    // reachable solely through the harvest.
    assert_eq!(run.resolver.requests(), &["a", "b", "c"]);
    assert!(run.session.is_skipped("a"));
    assert!(run.session.is_skipped("b"));
    assert_eq!(run.session.get("c"), Some("3"));
    // With "a" gone the rule can never fire.
    assert!(!run.outcome.is_diagnosis());
}

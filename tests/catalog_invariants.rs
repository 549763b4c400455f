//! Variable Catalog Invariant Tests
//!
//! The catalog is a derived snapshot over the rule base:
//! - Rebuilding from an unchanged base is idempotent
//! - Value lists are sorted and deduplicated
//! - The indicator augmentation always offers the "normal" value
//! - Rule-base mutations are reflected only through a rebuild

use faultwise::catalog::VariableCatalog;
use faultwise::rule::{Rule, RuleParser};

// =============================================================================
// Helper Functions
// =============================================================================

fn rules(lines: &[&str]) -> Vec<Rule> {
    let parser = RuleParser::new();
    lines.iter().map(|l| parser.parse(l).unwrap()).collect()
}

// =============================================================================
// Idempotence
// =============================================================================

/// Building twice from the same rules yields the same keys and the same
/// sorted value lists.
#[test]
fn test_rebuild_is_idempotent() {
    let base = rules(&[
        "IF power=on AND beeps=short THEN problem=ram",
        "IF power=off THEN problem=psu",
        "IF beeps=long AND power=on THEN problem=gpu",
    ]);

    let first = VariableCatalog::build(&base);
    let second = VariableCatalog::build(&base);

    assert_eq!(first, second);
    assert_eq!(
        first.candidates("beeps").unwrap(),
        &["long".to_string(), "short".to_string()]
    );
    assert_eq!(
        first.candidates("power").unwrap(),
        &["off".to_string(), "on".to_string()]
    );
}

/// Duplicate conditions across rules collapse to one catalog value.
#[test]
fn test_values_deduplicated() {
    let base = rules(&[
        "IF power=off THEN problem=psu",
        "IF power=off AND fan=silent THEN problem=dead_board",
    ]);

    let catalog = VariableCatalog::build(&base);
    assert_eq!(catalog.candidates("power").unwrap(), &["off".to_string()]);
}

// =============================================================================
// Indicator Augmentation
// =============================================================================

/// The normal value joins the indicator's list even when no rule tests
/// for it, and the list stays sorted.
#[test]
fn test_indicator_normal_value_offered() {
    let base = rules(&["IF monitor_display=artifacts THEN problem=gpu"]);

    let catalog = VariableCatalog::build(&base).with_forced_value("monitor_display", "yes");

    assert_eq!(
        catalog.candidates("monitor_display").unwrap(),
        &["artifacts".to_string(), "yes".to_string()]
    );
}

/// Augmentation is idempotent and never duplicates an existing value.
#[test]
fn test_indicator_augmentation_idempotent() {
    let base = rules(&["IF monitor_display=yes THEN status=healthy"]);

    let catalog = VariableCatalog::build(&base)
        .with_forced_value("monitor_display", "yes")
        .with_forced_value("monitor_display", "yes");

    assert_eq!(
        catalog.candidates("monitor_display").unwrap(),
        &["yes".to_string()]
    );
}

// =============================================================================
// Snapshot Semantics
// =============================================================================

/// A catalog does not track later rule-base changes; only a rebuild does.
#[test]
fn test_catalog_is_a_snapshot() {
    let mut base = rules(&["IF power=off THEN problem=psu"]);
    let before = VariableCatalog::build(&base);

    base.push(RuleParser::new().parse("IF power=flicker THEN problem=cable").unwrap());
    let after = VariableCatalog::build(&base);

    assert_eq!(before.candidates("power").unwrap(), &["off".to_string()]);
    assert_eq!(
        after.candidates("power").unwrap(),
        &["flicker".to_string(), "off".to_string()]
    );
}

/// Conclusion-only variables stay out of the catalog, so they are never
/// offered as multiple choice.
#[test]
fn test_conclusion_only_variables_excluded() {
    let base = rules(&[
        "IF power=off THEN problem=psu",
        "IF problem=psu THEN solution=replace_psu",
    ]);

    let catalog = VariableCatalog::build(&base);
    // "problem" appears in a condition of rule 2, so it is cataloged;
    // "solution" never appears in any condition.
    assert!(catalog.contains("problem"));
    assert!(!catalog.contains("solution"));
}

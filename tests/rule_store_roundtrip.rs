//! Rule Store Persistence Tests
//!
//! Tests for the file-backed rule base:
//! - Missing rule files are created, not fatal
//! - Malformed lines are reported and skipped, valid lines load
//! - Save/load round trips preserve rule order and content
//! - Mutations persist immediately

use std::fs;

use faultwise::catalog::VariableCatalog;
use faultwise::rule::{RuleError, RuleStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_rules(content: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("rules.txt");
    fs::write(&path, content).unwrap();
    (tmp, path)
}

// =============================================================================
// Loading
// =============================================================================

/// A missing rule file is created empty on first open.
#[test]
fn test_missing_file_created_empty() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("rules.txt");

    let (store, outcome) = RuleStore::open(&path).unwrap();

    assert!(store.rules().is_empty());
    assert_eq!(outcome.loaded, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

/// Malformed lines never abort a load; each is reported with its line
/// number and the valid remainder is kept.
#[test]
fn test_malformed_lines_reported_not_fatal() {
    let (_tmp, path) = write_rules(
        "IF power=off THEN problem=psu\n\
         this is not a rule\n\
         IF THEN broken\n\
         IF a=1 AND b THEN c=3\n\
         IF beeps=long THEN problem=ram\n",
    );

    let (store, outcome) = RuleStore::open(&path).unwrap();

    assert_eq!(outcome.loaded, 2);
    assert_eq!(store.rules().len(), 2);
    let lines: Vec<usize> = outcome.malformed.iter().map(|(n, _, _)| *n).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    assert!(matches!(
        outcome.malformed[2].2,
        RuleError::MalformedCondition(_)
    ));
}

// =============================================================================
// Round Trips
// =============================================================================

/// Save then load reproduces the rule base exactly, in order.
#[test]
fn test_save_load_round_trip() {
    let (_tmp, path) = write_rules(
        "IF computer_powers_on=no THEN problem=power_supply\n\
         IF problem=power_supply THEN solution=replace_power_supply\n\
         IF fan=noisy AND temp=high THEN problem=cooling\n",
    );

    let (store, _) = RuleStore::open(&path).unwrap();
    store.save().unwrap();
    let (reopened, outcome) = RuleStore::open(&path).unwrap();

    assert_eq!(outcome.loaded, 3);
    assert_eq!(reopened.rules(), store.rules());
}

/// The catalog built from a reloaded base equals the one built before the
/// round trip.
#[test]
fn test_catalog_survives_round_trip() {
    let (_tmp, path) = write_rules(
        "IF power=off THEN problem=psu\n\
         IF power=on AND beeps=short THEN problem=ram\n",
    );

    let (store, _) = RuleStore::open(&path).unwrap();
    let before = VariableCatalog::build(store.rules());
    store.save().unwrap();
    let (reopened, _) = RuleStore::open(&path).unwrap();
    let after = VariableCatalog::build(reopened.rules());

    assert_eq!(before, after);
}

// =============================================================================
// Mutations
// =============================================================================

/// Adding persists immediately; a fresh open sees the new rule last.
#[test]
fn test_add_rule_persists() {
    let (_tmp, path) = write_rules("IF a=1 THEN b=2\n");

    let (mut store, _) = RuleStore::open(&path).unwrap();
    store.add_line("IF b=2 THEN problem=X").unwrap();

    let (reopened, outcome) = RuleStore::open(&path).unwrap();
    assert_eq!(outcome.loaded, 2);
    assert_eq!(
        reopened.rules().last().unwrap().to_string(),
        "IF b=2 THEN problem=X"
    );
}

/// A rejected rule line leaves the store and the file untouched.
#[test]
fn test_rejected_add_changes_nothing() {
    let (_tmp, path) = write_rules("IF a=1 THEN b=2\n");

    let (mut store, _) = RuleStore::open(&path).unwrap();
    let before = fs::read_to_string(&path).unwrap();
    assert!(store.add_line("IF broken THEN").is_err());

    assert_eq!(store.rules().len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

/// Deleting by number persists and renumbers the remainder.
#[test]
fn test_delete_rule_persists() {
    let (_tmp, path) = write_rules(
        "IF a=1 THEN b=2\n\
         IF b=2 THEN c=3\n\
         IF c=3 THEN d=4\n",
    );

    let (mut store, _) = RuleStore::open(&path).unwrap();
    store.delete(2).unwrap();

    let (reopened, outcome) = RuleStore::open(&path).unwrap();
    assert_eq!(outcome.loaded, 2);
    assert_eq!(reopened.rules()[0].to_string(), "IF a=1 THEN b=2");
    assert_eq!(reopened.rules()[1].to_string(), "IF c=3 THEN d=4");
}

//! Workbook loading against a checked-in coding manual
//!
//! `fixtures/coding_manual.xlsx` leaves column A empty and keeps a header in
//! row 1. Sheet1 holds two tasks; a second sheet "Notes" holds free text.

use std::path::PathBuf;
use tav_extract::services::{load_workbook, HierarchyError, DEFAULT_SHEET};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("coding_manual.xlsx")
}

#[test]
fn test_load_coding_manual() {
    let hierarchies = load_workbook(&fixture(), DEFAULT_SHEET).unwrap();

    let tasks: Vec<&String> = hierarchies.keys().collect();
    assert_eq!(tasks, vec!["TShirt_Off", "Pants_On"]);
    // Header row is not a task
    assert!(!hierarchies.contains_key("Task"));

    let shirt = &hierarchies["TShirt_Off"];
    assert_eq!(shirt.subtask_count(), 2);
    assert_eq!(
        shirt.components("Orient shirt").unwrap(),
        &["Grasp hem".to_string(), "Lift hem".to_string()]
    );
    // Numeric cells keep their display form
    assert_eq!(
        shirt.components("Unsleeve left arm").unwrap(),
        &["2".to_string()]
    );

    let pants = &hierarchies["Pants_On"];
    assert_eq!(
        pants.components("Thread").unwrap(),
        &["1.5".to_string(), "Thread left leg".to_string()]
    );
}

#[test]
fn test_other_sheet_has_no_hierarchy_columns() {
    let hierarchies = load_workbook(&fixture(), "Notes").unwrap();
    assert!(hierarchies.is_empty());
}

#[test]
fn test_missing_sheet() {
    match load_workbook(&fixture(), "Sheet9") {
        Err(HierarchyError::SheetNotFound(name)) => assert_eq!(name, "Sheet9"),
        other => panic!("Expected SheetNotFound, got {:?}", other.map(|h| h.len())),
    }
}

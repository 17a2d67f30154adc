//! Tests for the JSON loader.
//!
//! These tests verify both accepted layouts and the rejected shapes:
//! - Arrays of records
//! - Objects of columns
//! - Nulls, booleans and absent keys
//! - Parse errors

use iqr::prelude::*;

// ============================================================================
// Record Layout Tests
// ============================================================================

/// Test an array of records.
#[test]
fn test_records() {
    let json = r#"[
        {"city": "Oslo", "temp": 4.5},
        {"city": "Rome", "temp": 15},
        {"city": "Lima", "temp": null}
    ]"#;
    let table: Table<f64> = JsonLoader::new().load_str(json).unwrap();

    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["city", "temp"]);
    assert_eq!(
        table.column("temp").unwrap().as_numeric().unwrap(),
        &[Some(4.5), Some(15.0), None]
    );
    assert_eq!(table.column("city").unwrap().kind(), ColumnKind::Categorical);
}

/// Test keys absent from some records are missing there.
///
/// Columns appear in first-seen key order.
#[test]
fn test_records_with_absent_keys() {
    let json = r#"[{"a": 1}, {"b": "x"}, {"a": 3, "b": "y"}]"#;
    let table: Table<f64> = JsonLoader::new().load_str(json).unwrap();

    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        table.column("a").unwrap().as_numeric().unwrap(),
        &[Some(1.0), None, Some(3.0)]
    );
    assert_eq!(
        table.column("b").unwrap().as_categorical().unwrap(),
        &[None, Some("x".to_string()), Some("y".to_string())]
    );
}

/// Test booleans are categorical text.
#[test]
fn test_booleans() {
    let table: Table<f64> = JsonLoader::new()
        .load_str(r#"[{"ok": true}, {"ok": false}]"#)
        .unwrap();
    assert_eq!(
        table.column("ok").unwrap().as_categorical().unwrap(),
        &[Some("true".to_string()), Some("false".to_string())]
    );
}

/// Test an empty array gives an empty table.
#[test]
fn test_empty_array() {
    let table: Table<f64> = JsonLoader::new().load_str("[]").unwrap();
    assert_eq!(table.n_cols(), 0);
    assert_eq!(table.n_rows(), 0);
}

// ============================================================================
// Column Layout Tests
// ============================================================================

/// Test an object of columns.
#[test]
fn test_columns() {
    let json = r#"{"v": [1, 2, null, 100], "tag": ["a", "b", "c", "d"]}"#;
    let table: Table<f64> = JsonLoader::new().load_str(json).unwrap();

    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["v", "tag"]);
    assert_eq!(table.n_rows(), 4);
    assert_eq!(table.column("v").unwrap().missing_count(), 1);
}

/// Test columns of unequal length.
#[test]
fn test_columns_unequal_length() {
    let err = JsonLoader::new()
        .load_str::<f64>(r#"{"a": [1, 2], "b": [1]}"#)
        .unwrap_err();
    assert_eq!(
        err,
        IqrError::MismatchedLengths {
            column: "b".into(),
            expected: 2,
            got: 1
        }
    );
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test a non-object record.
#[test]
fn test_non_object_record() {
    let err = JsonLoader::new()
        .load_str::<f64>(r#"[{"a": 1}, 2]"#)
        .unwrap_err();
    assert!(matches!(err, IqrError::Parse { line: 2, .. }), "got {err:?}");
}

/// Test nested values are rejected.
#[test]
fn test_nested_value() {
    let err = JsonLoader::new()
        .load_str::<f64>(r#"[{"a": {"b": 1}}]"#)
        .unwrap_err();
    assert!(matches!(err, IqrError::Parse { .. }));
}

/// Test a scalar document.
#[test]
fn test_scalar_document() {
    let err = JsonLoader::new().load_str::<f64>("42").unwrap_err();
    assert!(matches!(err, IqrError::Parse { line: 0, .. }));
}

/// Test a column that is not an array.
#[test]
fn test_column_not_array() {
    let err = JsonLoader::new()
        .load_str::<f64>(r#"{"a": 1}"#)
        .unwrap_err();
    assert!(matches!(err, IqrError::Parse { .. }));
}

/// Test malformed JSON.
#[test]
fn test_malformed() {
    let err = JsonLoader::new()
        .load_str::<f64>("[{\"a\": 1,}\n]")
        .unwrap_err();
    assert!(matches!(err, IqrError::Parse { line: 1, .. }), "got {err:?}");
}

/// Test a missing file.
#[test]
fn test_missing_file() {
    let err = JsonLoader::new()
        .load_path::<f64, _>("/nonexistent/dir/data.json")
        .unwrap_err();
    assert!(matches!(err, IqrError::Io(_)));
}

// ============================================================================
// End-to-End Tests
// ============================================================================

/// Test loading and scanning a record document.
#[test]
fn test_load_and_scan() {
    let json = r#"[
        {"id": "a", "v": 1}, {"id": "b", "v": 2}, {"id": "c", "v": 2},
        {"id": "d", "v": 3}, {"id": "e", "v": 3}, {"id": "f", "v": 3},
        {"id": "g", "v": 4}, {"id": "h", "v": 4}, {"id": "i", "v": 100}
    ]"#;
    let table: Table<f64> = JsonLoader::new().load_str(json).unwrap();
    let result = Iqr::new().build().unwrap().scan(&table, "v").unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.rows.row(0).unwrap().get("id"), Some(Cell::Text("i")));
}

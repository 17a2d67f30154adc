//! Tests for the in-memory table model.
//!
//! These tests verify table construction, row access and serialization:
//! - Column constructors and kinds
//! - Name and length checks
//! - Row views and cell access
//! - Row selection with `take`
//! - JSON serialization

use iqr::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn people() -> Table<f64> {
    Table::from_columns(vec![
        Column::categorical_opt("name", [Some("ann"), Some("bob"), None]),
        Column::numeric_opt("age", [Some(31.0), None, Some(f64::NAN)]),
        Column::numeric("score", [0.5, 0.7, 0.9]),
    ])
    .unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test table shape and column lookup.
#[test]
fn test_table_shape() {
    let table = people();
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_cols(), 3);
    assert!(!table.is_empty());
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["name", "age", "score"]
    );
    assert!(table.column("age").is_some());
    assert!(table.column("height").is_none());
}

/// Test column kinds and numeric column iteration.
#[test]
fn test_column_kinds() {
    let table = people();
    assert_eq!(table.column("name").unwrap().kind(), ColumnKind::Categorical);
    assert_eq!(table.column("age").unwrap().kind(), ColumnKind::Numeric);
    assert_eq!(ColumnKind::Categorical.to_string(), "categorical");

    let numeric: Vec<&str> = table.numeric_columns().map(|c| c.name()).collect();
    assert_eq!(numeric, vec!["age", "score"]);
}

/// Test missing counts treat NaN as missing.
#[test]
fn test_missing_count() {
    let table = people();
    assert_eq!(table.column("name").unwrap().missing_count(), 1);
    assert_eq!(table.column("age").unwrap().missing_count(), 2);
    assert_eq!(table.column("score").unwrap().missing_count(), 0);
}

/// Test duplicate column names are rejected.
#[test]
fn test_duplicate_column() {
    let err = Table::from_columns(vec![
        Column::numeric("x", [1.0]),
        Column::numeric("x", [2.0]),
    ])
    .unwrap_err();
    assert_eq!(err, IqrError::DuplicateColumn("x".into()));
}

/// Test columns of unequal length are rejected.
#[test]
fn test_mismatched_lengths() {
    let err = Table::new()
        .with_column(Column::numeric("a", [1.0, 2.0, 3.0]))
        .unwrap()
        .with_column(Column::numeric("b", [1.0, 2.0]))
        .unwrap_err();
    assert_eq!(
        err,
        IqrError::MismatchedLengths {
            column: "b".into(),
            expected: 3,
            got: 2
        }
    );
}

/// Test an empty table.
#[test]
fn test_empty_table() {
    let table = Table::<f64>::new();
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 0);
    assert!(table.is_empty());
    assert!(table.row(0).is_none());
}

// ============================================================================
// Row Access Tests
// ============================================================================

/// Test cells of a row.
#[test]
fn test_row_cells() {
    let table = people();
    let row = table.row(0).unwrap();
    assert_eq!(row.index(), 0);
    assert_eq!(row.get("name"), Some(Cell::Text("ann")));
    assert_eq!(row.get("age"), Some(Cell::Number(31.0)));
    assert_eq!(row.get("height"), None);

    let last = table.row(2).unwrap();
    assert_eq!(last.get("name"), Some(Cell::Missing));
    assert_eq!(last.get("age"), Some(Cell::Missing));

    let cells: Vec<String> = last.cells().map(|(_, c)| c.to_string()).collect();
    assert_eq!(cells, vec!["NA", "NA", "0.9"]);
}

/// Test row iteration.
#[test]
fn test_rows_iterate_in_order() {
    let table = people();
    let indices: Vec<usize> = table.rows().map(|r| r.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(table.row(3).is_none());
}

/// Test row selection.
#[test]
fn test_take() {
    let table = people();
    let picked = table.take(&[2, 0]);
    assert_eq!(picked.n_rows(), 2);
    assert_eq!(picked.n_cols(), 3);
    assert_eq!(picked.row(0).unwrap().get("score"), Some(Cell::Number(0.9)));
    assert_eq!(
        picked.row(1).unwrap().get("name"),
        Some(Cell::Text("ann"))
    );

    let none = table.take(&[]);
    assert_eq!(none.n_rows(), 0);
    assert_eq!(none.n_cols(), 3);
}

// ============================================================================
// Serialization Tests
// ============================================================================

/// Test a table serializes as an array of row objects.
#[test]
fn test_table_json() {
    let json = serde_json::to_value(people()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "ann");
    assert_eq!(rows[0]["age"], 31.0);
    assert!(rows[1]["age"].is_null());
    assert!(rows[2]["name"].is_null());
    assert!(rows[2]["age"].is_null());
}

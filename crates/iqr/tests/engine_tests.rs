#![cfg(feature = "dev")]
//! Tests for the validation and execution engine.
//!
//! These tests drive the validator and executor directly, below the builder:
//! - Table and column checks
//! - Parameter validation
//! - Missing-value policies
//! - Single-column and whole-table execution
//!
//! ## Test Organization
//!
//! 1. **Validator** - Tables, columns, observations, parameters
//! 2. **Executor** - prepare, run, run_all

use iqr::internals::engine::executor::{MissingPolicy, ScanConfig, ScanExecutor};
use iqr::internals::engine::validator::Validator;
use iqr::internals::math::quantile::QuantileMethod;
use iqr::internals::primitives::errors::IqrError;
use iqr::internals::primitives::sorting::Observations;
use iqr::internals::primitives::table::{Column, Table};

// ============================================================================
// Helper Functions
// ============================================================================

fn config(parallel: bool) -> ScanConfig<f64> {
    ScanConfig {
        multiplier: 1.5,
        quantile_method: QuantileMethod::Linear,
        missing_policy: MissingPolicy::Skip,
        parallel,
    }
}

fn table() -> Table<f64> {
    Table::from_columns(vec![
        Column::categorical("label", ["p", "q", "r", "s", "t"]),
        Column::numeric("v", [1.0, 2.0, 3.0, 4.0, 50.0]),
        Column::numeric_opt("gap", [Some(1.0), None, Some(1.0), Some(1.0), None]),
        Column::numeric_opt("void", [None; 5]),
    ])
    .unwrap()
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test empty tables are rejected.
#[test]
fn test_validate_table() {
    assert_eq!(
        Validator::validate_table(&Table::<f64>::new()),
        Err(IqrError::EmptyInput)
    );
    assert!(Validator::validate_table(&table()).is_ok());
}

/// Test column resolution.
#[test]
fn test_numeric_column() {
    let t = table();
    assert_eq!(Validator::numeric_column(&t, "v").unwrap().len(), 5);
    assert_eq!(
        Validator::numeric_column(&t, "nope").unwrap_err(),
        IqrError::InvalidColumn {
            column: "nope".into(),
            reason: "no such column"
        }
    );
    assert_eq!(
        Validator::numeric_column(&t, "label").unwrap_err(),
        IqrError::InvalidColumn {
            column: "label".into(),
            reason: "column is not numeric"
        }
    );
}

/// Test missing-value policies on observations.
#[test]
fn test_validate_observations() {
    let obs = Observations::extract(&[Some(1.0), None]);
    assert!(Validator::validate_observations(&obs, "c", MissingPolicy::Skip).is_ok());
    assert_eq!(
        Validator::validate_observations(&obs, "c", MissingPolicy::Reject),
        Err(IqrError::MissingValues {
            column: "c".into(),
            count: 1
        })
    );

    let empty = Observations::<f64>::extract(&[None]);
    assert_eq!(
        Validator::validate_observations(&empty, "c", MissingPolicy::Skip),
        Err(IqrError::NoObservations { column: "c".into() })
    );
}

/// Test parameter validation.
#[test]
fn test_validate_parameters() {
    assert!(Validator::validate_multiplier(0.0).is_ok());
    assert!(Validator::validate_multiplier(1.5).is_ok());
    assert_eq!(
        Validator::validate_multiplier(-0.5),
        Err(IqrError::InvalidMultiplier(-0.5))
    );

    assert!(Validator::validate_quantile(0.0).is_ok());
    assert!(Validator::validate_quantile(1.0).is_ok());
    assert_eq!(
        Validator::validate_quantile(2.0),
        Err(IqrError::InvalidQuantile(2.0))
    );

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("trim")),
        Err(IqrError::DuplicateParameter { parameter: "trim" })
    );
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(IqrError::EmptyInput.to_string(), "Input table is empty");
    assert_eq!(
        IqrError::InvalidColumn {
            column: "x".into(),
            reason: "no such column"
        }
        .to_string(),
        "Invalid column 'x': no such column"
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test prepare computes quartiles and fence.
///
/// [1, 2, 3, 4, 50]: Q1 = 2, Q3 = 4, fence [-1, 7].
#[test]
fn test_prepare() {
    let prepared = ScanExecutor::prepare(&table(), "v", &config(false)).unwrap();
    assert_eq!(prepared.quartiles.q1, 2.0);
    assert_eq!(prepared.quartiles.q3, 4.0);
    assert_eq!((prepared.fence.lower, prepared.fence.upper), (-1.0, 7.0));
    assert_eq!(prepared.observations.len(), 5);
}

/// Test run flags the outlier and copies its row.
#[test]
fn test_run() {
    let result = ScanExecutor::run(&table(), "v", &config(false)).unwrap();
    assert_eq!(result.indices, vec![4]);
    assert_eq!(result.rows.n_rows(), 1);
    assert_eq!(result.multiplier, 1.5);
}

/// Test run with gaps keeps original row indices.
#[test]
fn test_run_with_gaps() {
    let result = ScanExecutor::run(&table(), "gap", &config(false)).unwrap();
    assert_eq!(result.count, 0);
    assert_eq!(result.observed, 3);
    assert_eq!(result.missing, 2);
}

/// Test run_all in both execution modes.
#[test]
fn test_run_all() {
    let t = table();
    for parallel in [false, true] {
        let report = ScanExecutor::run_all(&t, &config(parallel)).unwrap();
        let names: Vec<&str> = report.results.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(names, vec!["v", "gap"]);
        assert_eq!(report.skipped, vec!["void".to_string()]);
    }
}

/// Test run_all under the reject policy.
#[test]
fn test_run_all_reject() {
    let cfg = ScanConfig {
        missing_policy: MissingPolicy::Reject,
        ..config(false)
    };
    let err = ScanExecutor::run_all(&table(), &cfg).unwrap_err();
    assert_eq!(
        err,
        IqrError::MissingValues {
            column: "gap".into(),
            count: 2
        }
    );
}

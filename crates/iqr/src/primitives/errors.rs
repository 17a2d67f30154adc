//! Error types for IQR operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while building tables,
//! loading data, configuring the scanner and scanning columns.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending column, line or value.
//! * **Deferred**: Builder misconfiguration is reported when `.build()` is called.
//! * **Comparable**: The error is `Clone + PartialEq` so tests can match on it;
//!   foreign errors (I/O, CSV, JSON) are flattened to their message.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty tables, unknown or non-numeric columns.
//! 2. **Parameter validation**: Fence multiplier, quantile probability, duplicates.
//! 3. **Table construction**: Duplicate column names, ragged columns.
//! 4. **Loading**: Parse failures and I/O failures from the adapters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for IQR operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IqrError {
    /// The table has no rows (or no columns at all).
    #[error("Input table is empty")]
    EmptyInput,

    /// The selected column does not exist or is not numeric.
    #[error("Invalid column '{column}': {reason}")]
    InvalidColumn {
        /// Name that was requested.
        column: String,
        /// Why the column cannot be scanned.
        reason: &'static str,
    },

    /// The column exists but every value in it is missing.
    #[error("Column '{column}' has no observations")]
    NoObservations {
        /// Name of the column.
        column: String,
    },

    /// Missing values were found while the reject policy was active.
    #[error("Column '{column}' contains {count} missing value(s)")]
    MissingValues {
        /// Name of the column.
        column: String,
        /// Number of missing values found.
        count: usize,
    },

    /// Fence multiplier must be finite and non-negative.
    #[error("Invalid multiplier: {0} (must be >= 0 and finite)")]
    InvalidMultiplier(f64),

    /// Quantile probability must lie in [0, 1].
    #[error("Invalid quantile: {0} (must be in [0, 1])")]
    InvalidQuantile(f64),

    /// Parameter was set multiple times in a builder.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Two columns share a name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column's length does not match the table's row count.
    #[error("Length mismatch: column '{column}' has {got} values, table has {expected} rows")]
    MismatchedLengths {
        /// Name of the column.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Length of the offending column.
        got: usize,
    },

    /// Input could not be parsed into a table.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line (CSV) or record index (JSON) where parsing failed.
        line: usize,
        /// Description of the failure.
        message: String,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

// ============================================================================
// Conversions
// ============================================================================

impl From<std::io::Error> for IqrError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for IqrError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io.to_string()),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::Parse {
                line,
                message: format!("record has {len} fields, expected {expected_len}"),
            },
            kind => Self::Parse {
                line,
                message: format!("{kind:?}"),
            },
        }
    }
}

impl From<serde_json::Error> for IqrError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return Self::Io(err.to_string());
        }
        Self::Parse {
            line: err.line(),
            message: err.to_string(),
        }
    }
}

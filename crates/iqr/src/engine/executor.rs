//! Execution engine for outlier scans.
//!
//! ## Purpose
//!
//! This module runs the scan pipeline for one column (validate, extract,
//! sort, estimate quartiles, fence, filter) and fans it out across every
//! numeric column of a table.
//!
//! ## Design notes
//!
//! * **Pure**: The table is only borrowed; a scan has no side effects besides tracing events.
//! * **Atomic**: A scan either returns a complete result or an error, never a partial one.
//! * **Parallel**: With the `parallel` feature, whole-table scans run one column per task.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Missing policy**: Missing cells are either skipped (excluded from the
//!   quartiles and never flagged) or rejected with an error.
//! * **Ordering**: Flagged rows are emitted in input order.
//!
//! ## Non-goals
//!
//! * This module does not parse input or render output.

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::fence::{Fence, Quartiles, Side};
use crate::engine::output::{ScanReport, ScanResult};
use crate::engine::validator::Validator;
use crate::math::quantile::QuantileMethod;
use crate::primitives::errors::IqrError;
use crate::primitives::sorting::{sorted_copy, Observations};
use crate::primitives::table::Table;

// ============================================================================
// Configuration
// ============================================================================

/// Treatment of missing cells in the scanned column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Exclude missing cells from the quartiles and never flag them.
    #[default]
    Skip,

    /// Fail with `IqrError::MissingValues` if any cell is missing.
    Reject,
}

/// Resolved scan parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig<T> {
    /// Fence multiplier `k`.
    pub multiplier: T,

    /// Quantile estimation rule.
    pub quantile_method: QuantileMethod,

    /// Missing-value treatment.
    pub missing_policy: MissingPolicy,

    /// Scan columns concurrently in whole-table scans.
    pub parallel: bool,
}

/// Quartiles and fence of one column, with the observations they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared<T> {
    /// Finite values of the column in row order.
    pub observations: Observations<T>,
    /// Quartiles of the observations.
    pub quartiles: Quartiles<T>,
    /// Fence derived from the quartiles.
    pub fence: Fence<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless scan runner.
pub struct ScanExecutor;

impl ScanExecutor {
    /// Validate the column and compute its quartiles and fence.
    pub fn prepare<T: Float>(
        table: &Table<T>,
        column: &str,
        config: &ScanConfig<T>,
    ) -> Result<Prepared<T>, IqrError> {
        Validator::validate_table(table)?;
        let cells = Validator::numeric_column(table, column)?;

        let observations = Observations::extract(cells);
        Validator::validate_observations(&observations, column, config.missing_policy)?;
        if observations.missing > 0 {
            warn!(
                column,
                missing = observations.missing,
                "skipping missing values"
            );
        }

        let sorted = sorted_copy(&observations.values);
        let quartiles = Quartiles::from_sorted(&sorted, config.quantile_method).ok_or_else(
            || IqrError::NoObservations {
                column: column.to_owned(),
            },
        )?;
        let fence = quartiles.fence(config.multiplier);

        Ok(Prepared {
            observations,
            quartiles,
            fence,
        })
    }

    /// Scan one column for values strictly outside its fence.
    pub fn run<T: Float>(
        table: &Table<T>,
        column: &str,
        config: &ScanConfig<T>,
    ) -> Result<ScanResult<T>, IqrError> {
        let Prepared {
            observations,
            quartiles,
            fence,
        } = Self::prepare(table, column, config)?;

        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut sides = Vec::new();
        for (&value, &row) in observations.values.iter().zip(&observations.rows) {
            let side = fence.side(value);
            if side != Side::Inside {
                indices.push(row);
                values.push(value);
                sides.push(side);
            }
        }

        let rows = table.take(&indices);
        debug!(
            column,
            observed = observations.len(),
            lower = fence.lower.to_f64().unwrap_or(f64::NAN),
            upper = fence.upper.to_f64().unwrap_or(f64::NAN),
            outliers = indices.len(),
            "scanned column"
        );

        Ok(ScanResult {
            column: column.to_owned(),
            count: indices.len(),
            rows,
            indices,
            values,
            sides,
            quartiles,
            fence,
            multiplier: config.multiplier,
            observed: observations.len(),
            missing: observations.missing,
        })
    }

    /// Scan every numeric column of `table`, in column order.
    ///
    /// Columns with no observations are listed in `skipped`; any other error
    /// aborts the whole report.
    pub fn run_all<T: Float + Send + Sync>(
        table: &Table<T>,
        config: &ScanConfig<T>,
    ) -> Result<ScanReport<T>, IqrError> {
        Validator::validate_table(table)?;
        let names: Vec<&str> = table.numeric_columns().map(|c| c.name()).collect();

        let outcomes = Self::scan_columns(table, &names, config);

        let mut results = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(IqrError::NoObservations { column }) => skipped.push(column),
                Err(err) => return Err(err),
            }
        }

        debug!(
            columns = results.len(),
            skipped = skipped.len(),
            "scanned table"
        );

        Ok(ScanReport {
            n_rows: table.n_rows(),
            results,
            skipped,
        })
    }

    #[cfg(feature = "parallel")]
    fn scan_columns<T: Float + Send + Sync>(
        table: &Table<T>,
        names: &[&str],
        config: &ScanConfig<T>,
    ) -> Vec<Result<ScanResult<T>, IqrError>> {
        if config.parallel {
            names
                .par_iter()
                .map(|name| Self::run(table, name, config))
                .collect()
        } else {
            names
                .iter()
                .map(|name| Self::run(table, name, config))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_columns<T: Float + Send + Sync>(
        table: &Table<T>,
        names: &[&str],
        config: &ScanConfig<T>,
    ) -> Vec<Result<ScanResult<T>, IqrError>> {
        names
            .iter()
            .map(|name| Self::run(table, name, config))
            .collect()
    }
}

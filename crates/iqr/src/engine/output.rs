//! Output types for outlier scans.
//!
//! ## Purpose
//!
//! This module defines `ScanResult`, the outcome of scanning one column, and
//! `ScanReport`, the outcome of scanning every numeric column of a table.
//!
//! ## Design notes
//!
//! * **Self-describing**: Results carry the quartiles and fence that produced them.
//! * **Row view**: The flagged rows are materialised as a `Table` in input order.
//! * **Ergonomics**: Implements `Display` for human-readable output and
//!   `Serialize` for JSON.
//!
//! ## Invariants
//!
//! * `count == indices.len() == values.len() == sides.len() == rows.n_rows()`.
//! * `indices` is strictly increasing.
//! * Every entry of `values` is strictly outside `fence`.
//! * `fence.lower <= fence.upper`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;
use serde::Serialize;

// Internal dependencies
use crate::algorithms::fence::{Fence, Quartiles, Side};
use crate::primitives::table::Table;

// ============================================================================
// Single-Column Result
// ============================================================================

/// Outliers found in one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Float + Serialize"))]
pub struct ScanResult<T> {
    /// Name of the scanned column.
    pub column: String,

    /// Number of outlying rows.
    pub count: usize,

    /// Original row index of each outlier.
    pub indices: Vec<usize>,

    /// Column value of each outlier.
    pub values: Vec<T>,

    /// Side of the fence each outlier lies on.
    pub sides: Vec<Side>,

    /// Quartiles of the observed values.
    pub quartiles: Quartiles<T>,

    /// Fence used to flag outliers.
    pub fence: Fence<T>,

    /// Fence multiplier.
    pub multiplier: T,

    /// Number of values used for the quartiles.
    pub observed: usize,

    /// Number of missing values skipped.
    pub missing: usize,

    /// Outlying rows, all columns, in input order.
    pub rows: Table<T>,
}

impl<T: Float> ScanResult<T> {
    /// Split into `(count, rows)`.
    pub fn into_parts(self) -> (usize, Table<T>) {
        (self.count, self.rows)
    }

    /// Check if no outliers were found.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Interquartile range.
    pub fn iqr(&self) -> T {
        self.quartiles.iqr()
    }

    /// Number of outliers below the lower bound.
    pub fn below(&self) -> usize {
        self.sides.iter().filter(|&&s| s == Side::Below).count()
    }

    /// Number of outliers above the upper bound.
    pub fn above(&self) -> usize {
        self.sides.iter().filter(|&&s| s == Side::Above).count()
    }

    /// Share of observed values that are outliers.
    pub fn outlier_fraction(&self) -> f64 {
        if self.observed == 0 {
            return 0.0;
        }
        self.count as f64 / self.observed as f64
    }
}

impl<T: Float + Display + Debug> Display for ScanResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Outlier Scan: {}", self.column)?;
        writeln!(f, "  Observations: {}", self.observed)?;
        if self.missing > 0 {
            writeln!(f, "  Missing:      {}", self.missing)?;
        }
        writeln!(
            f,
            "  Quartiles:    Q1={} Median={} Q3={}",
            self.quartiles.q1, self.quartiles.median, self.quartiles.q3
        )?;
        writeln!(f, "  IQR:          {}", self.iqr())?;
        writeln!(f, "  Fence:        {} (k={})", self.fence, self.multiplier)?;
        writeln!(
            f,
            "  Outliers:     {} ({} below, {} above)",
            self.count,
            self.below(),
            self.above()
        )?;

        if self.count == 0 {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{:>8} {:>14} {:>8}", "Row", "Value", "Side")?;
        writeln!(f, "{:-<width$}", "", width = 32)?;

        // Show first 10 and last 10 if more than 20 outliers
        let n = self.count;
        let shown: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };
        let mut prev = 0;
        for (i, &k) in shown.iter().enumerate() {
            if i > 0 && k != prev + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev = k;
            writeln!(
                f,
                "{:>8} {:>14.4} {:>8}",
                self.indices[k], self.values[k], self.sides[k]
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Whole-Table Report
// ============================================================================

/// Outlier scans of every numeric column of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Float + Serialize"))]
pub struct ScanReport<T> {
    /// Row count of the scanned table.
    pub n_rows: usize,

    /// One result per scanned column, in table order.
    pub results: Vec<ScanResult<T>>,

    /// Numeric columns skipped because every value was missing.
    pub skipped: Vec<String>,
}

impl<T: Float> ScanReport<T> {
    /// Result for a named column.
    pub fn get(&self, column: &str) -> Option<&ScanResult<T>> {
        self.results.iter().find(|r| r.column == column)
    }

    /// Sum of outlier counts over all columns.
    pub fn total_outliers(&self) -> usize {
        self.results.iter().map(|r| r.count).sum()
    }

    /// Sorted, de-duplicated indices of rows flagged in at least one column.
    pub fn flagged_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .results
            .iter()
            .flat_map(|r| r.indices.iter().copied())
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

impl<T: Float + Display + Debug> Display for ScanReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Outlier Report:")?;
        writeln!(f, "  Rows:           {}", self.n_rows)?;
        writeln!(f, "  Columns:        {}", self.results.len())?;
        writeln!(f, "  Total outliers: {}", self.total_outliers())?;
        writeln!(f, "  Flagged rows:   {}", self.flagged_rows().len())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:>16} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12} {:>8} {:>8}",
            "Column", "Observed", "Missing", "Q1", "Q3", "Lower", "Upper", "Outliers", "Percent"
        )?;
        writeln!(f, "{:-<width$}", "", width = 16 + 4 * 9 + 4 * 13)?;
        for r in &self.results {
            writeln!(
                f,
                "{:>16} {:>8} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>8} {:>7.2}%",
                r.column,
                r.observed,
                r.missing,
                r.quartiles.q1,
                r.quartiles.q3,
                r.fence.lower,
                r.fence.upper,
                r.count,
                r.outlier_fraction() * 100.0
            )?;
        }
        for name in &self.skipped {
            writeln!(f, "{:>16} {:>8}", name, "skipped")?;
        }
        Ok(())
    }
}

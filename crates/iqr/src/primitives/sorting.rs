//! Sorting and extraction utilities for numeric columns.
//!
//! ## Purpose
//!
//! This module pulls the usable observations out of a numeric column and
//! produces the ordered sample that quantile estimation works on.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so equal values keep their row order.
//! * **Missing values**: `None` and non-finite cells are dropped during extraction
//!   and counted so callers can report them.
//! * **Efficiency**: Already-sorted input skips the sort.
//!
//! ## Invariants
//!
//! * `Observations::values[i]` is the value at row `Observations::rows[i]`.
//! * `Observations::rows` is strictly increasing.
//! * Sorted output is non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not compute quantiles or validate columns.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Finite values of a column together with the rows they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations<T> {
    /// Finite values in row order.
    pub values: Vec<T>,

    /// Row index of each value.
    pub rows: Vec<usize>,

    /// Number of cells skipped as missing.
    pub missing: usize,
}

impl<T: Float> Observations<T> {
    /// Extract the finite values of a numeric column.
    pub fn extract(cells: &[Option<T>]) -> Self {
        let mut values = Vec::with_capacity(cells.len());
        let mut rows = Vec::with_capacity(cells.len());
        for (i, cell) in cells.iter().enumerate() {
            match cell {
                Some(x) if x.is_finite() => {
                    values.push(*x);
                    rows.push(i);
                }
                _ => {}
            }
        }
        let missing = cells.len() - values.len();
        Self {
            values,
            rows,
            missing,
        }
    }

    /// Number of usable observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no usable observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Return a sorted copy of `values` in ascending order.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Otherwise performs a stable sort with `partial_cmp`.
#[inline]
pub fn sorted_copy<T: Float>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    sort_in_place(&mut out);
    out
}

/// Sort `values` in ascending order in place.
#[inline]
pub fn sort_in_place<T: Float>(values: &mut [T]) {
    if is_sorted(values) {
        return;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Check whether `values` is non-decreasing.
#[inline]
pub fn is_sorted<T: Float>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

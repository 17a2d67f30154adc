#![cfg(feature = "dev")]
//! Tests for observation extraction and sorting utilities.
//!
//! ## Test Organization
//!
//! 1. **Extraction** - Finite values, row mapping, missing counts
//! 2. **Sorting** - Ordering, fast path, duplicates

use iqr::internals::primitives::sorting::{is_sorted, sort_in_place, sorted_copy, Observations};

// ============================================================================
// Extraction Tests
// ============================================================================

/// Test finite values keep their row positions.
#[test]
fn test_extract_skips_missing() {
    let cells = [
        Some(3.0),
        None,
        Some(f64::NAN),
        Some(1.0),
        Some(f64::INFINITY),
        Some(2.0),
    ];
    let obs = Observations::extract(&cells);

    assert_eq!(obs.values, vec![3.0, 1.0, 2.0]);
    assert_eq!(obs.rows, vec![0, 3, 5]);
    assert_eq!(obs.missing, 3);
    assert_eq!(obs.len(), 3);
}

/// Test an all-missing column.
#[test]
fn test_extract_all_missing() {
    let obs = Observations::<f64>::extract(&[None, None]);
    assert!(obs.is_empty());
    assert_eq!(obs.missing, 2);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test sorted copy leaves the input intact.
#[test]
fn test_sorted_copy() {
    let xs = vec![3.0, -1.0, 2.0, 2.0];
    let sorted = sorted_copy(&xs);
    assert_eq!(sorted, vec![-1.0, 2.0, 2.0, 3.0]);
    assert_eq!(xs, vec![3.0, -1.0, 2.0, 2.0]);
}

/// Test in-place sorting and the sorted check.
#[test]
fn test_sort_in_place() {
    let mut xs = [5.0, 4.0, 3.0];
    assert!(!is_sorted(&xs));
    sort_in_place(&mut xs);
    assert_eq!(xs, [3.0, 4.0, 5.0]);
    assert!(is_sorted(&xs));
}

/// Test trivial inputs count as sorted.
#[test]
fn test_is_sorted_trivial() {
    let empty: [f64; 0] = [];
    assert!(is_sorted(&empty));
    assert!(is_sorted(&[1.0]));
    assert!(is_sorted(&[1.0, 1.0, 1.0]));
}

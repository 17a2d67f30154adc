//! Input validation for scanner configuration and tables.
//!
//! ## Purpose
//!
//! This module provides the validation functions used by the builder and the
//! executor. It checks that a table can be scanned, that the selected column
//! is numeric, and that configuration values are in range.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Emptiness is checked before column lookup, so an empty table
//!   always reports `EmptyInput`.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter or transform input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::MissingPolicy;
use crate::primitives::errors::IqrError;
use crate::primitives::sorting::Observations;
use crate::primitives::table::Table;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for scanner configuration and input tables.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that the table has at least one column and one row.
    pub fn validate_table<T: Float>(table: &Table<T>) -> Result<(), IqrError> {
        if table.n_cols() == 0 || table.is_empty() {
            return Err(IqrError::EmptyInput);
        }
        Ok(())
    }

    /// Resolve `column` to its numeric cells.
    pub fn numeric_column<'a, T: Float>(
        table: &'a Table<T>,
        column: &str,
    ) -> Result<&'a [Option<T>], IqrError> {
        let col = table.column(column).ok_or_else(|| IqrError::InvalidColumn {
            column: column.to_owned(),
            reason: "no such column",
        })?;
        col.as_numeric().ok_or_else(|| IqrError::InvalidColumn {
            column: column.to_owned(),
            reason: "column is not numeric",
        })
    }

    /// Apply the missing-value policy to extracted observations.
    pub fn validate_observations<T: Float>(
        obs: &Observations<T>,
        column: &str,
        policy: MissingPolicy,
    ) -> Result<(), IqrError> {
        if policy == MissingPolicy::Reject && obs.missing > 0 {
            return Err(IqrError::MissingValues {
                column: column.to_owned(),
                count: obs.missing,
            });
        }
        if obs.is_empty() {
            return Err(IqrError::NoObservations {
                column: column.to_owned(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the fence multiplier.
    pub fn validate_multiplier<T: Float>(multiplier: T) -> Result<(), IqrError> {
        if !multiplier.is_finite() || multiplier < T::zero() {
            return Err(IqrError::InvalidMultiplier(
                multiplier.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a quantile probability.
    pub fn validate_quantile<T: Float>(p: T) -> Result<(), IqrError> {
        if !(p >= T::zero() && p <= T::one()) {
            return Err(IqrError::InvalidQuantile(p.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), IqrError> {
        if let Some(param) = duplicate_param {
            return Err(IqrError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

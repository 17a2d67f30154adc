//! High-level API for IQR outlier scanning.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder that produces an [`OutlierScanner`], and the table-level
//! [`describe`] and [`correlation`] functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Reusable**: A built scanner is immutable and can scan any number of tables.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`IqrBuilder`] via `Iqr::new()`.
//! 2. Chain configuration methods (`.multiplier()`, `.quantile_method()`, etc.).
//! 3. Call `.build()` to get an [`OutlierScanner`].
//!
//! ### Missing values
//!
//! Under the default [`MissingPolicy::Skip`], missing cells (absent, NaN or
//! infinite) are excluded from the quartiles and are never reported as
//! outliers; the number skipped is returned in [`ScanResult::missing`].
//! Use [`MissingPolicy::Reject`] to make them an error instead.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ScanConfig, ScanExecutor};
use crate::engine::validator::Validator;
use crate::primitives::sorting::{sorted_copy, Observations};

// Publicly re-exported types
pub use crate::adapters::csv::{CsvLoader, DEFAULT_MISSING_TOKENS};
pub use crate::adapters::json::JsonLoader;
pub use crate::algorithms::fence::{Fence, Quartiles, Side, DEFAULT_MULTIPLIER};
pub use crate::engine::executor::MissingPolicy;
pub use crate::engine::output::{ScanReport, ScanResult};
pub use crate::evaluation::correlation::CorrelationMatrix;
pub use crate::evaluation::summary::{
    CategoricalSummary, ColumnSummary, NumericSummary, TableSummary,
};
pub use crate::math::quantile::QuantileMethod;
pub use crate::primitives::errors::IqrError;
pub use crate::primitives::table::{Cell, Column, ColumnData, ColumnKind, Row, Table};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an outlier scanner.
#[derive(Debug, Clone)]
pub struct IqrBuilder<T> {
    /// Fence multiplier `k` (default 1.5).
    pub multiplier: Option<T>,

    /// Quantile estimation rule (default `Linear`).
    pub quantile_method: Option<QuantileMethod>,

    /// Missing-value treatment (default `Skip`).
    pub missing_policy: Option<MissingPolicy>,

    /// Scan columns concurrently in `scan_all` (default: on with the `parallel` feature).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for IqrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> IqrBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            multiplier: None,
            quantile_method: None,
            missing_policy: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the fence multiplier `k` in `[Q1 - k*IQR, Q3 + k*IQR]`.
    pub fn multiplier(mut self, multiplier: T) -> Self {
        if self.multiplier.is_some() {
            self.duplicate_param = Some("multiplier");
        }
        self.multiplier = Some(multiplier);
        self
    }

    /// Set the quantile estimation rule.
    pub fn quantile_method(mut self, method: QuantileMethod) -> Self {
        if self.quantile_method.is_some() {
            self.duplicate_param = Some("quantile_method");
        }
        self.quantile_method = Some(method);
        self
    }

    /// Set the missing-value policy.
    pub fn missing_policy(mut self, policy: MissingPolicy) -> Self {
        if self.missing_policy.is_some() {
            self.duplicate_param = Some("missing_policy");
        }
        self.missing_policy = Some(policy);
        self
    }

    /// Set the parallel execution hint for whole-table scans.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the scanner.
    pub fn build(self) -> Result<OutlierScanner<T>, IqrError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let multiplier = match self.multiplier {
            Some(k) => k,
            None => T::from(DEFAULT_MULTIPLIER).ok_or(IqrError::InvalidMultiplier(
                DEFAULT_MULTIPLIER,
            ))?,
        };
        Validator::validate_multiplier(multiplier)?;

        Ok(OutlierScanner {
            config: ScanConfig {
                multiplier,
                quantile_method: self.quantile_method.unwrap_or_default(),
                missing_policy: self.missing_policy.unwrap_or_default(),
                parallel: self.parallel.unwrap_or(cfg!(feature = "parallel")),
            },
        })
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Configured, reusable IQR outlier scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierScanner<T> {
    config: ScanConfig<T>,
}

impl<T: Float> OutlierScanner<T> {
    /// Fence multiplier in use.
    pub fn multiplier(&self) -> T {
        self.config.multiplier
    }

    /// Quantile rule in use.
    pub fn quantile_method(&self) -> QuantileMethod {
        self.config.quantile_method
    }

    /// Missing-value policy in use.
    pub fn missing_policy(&self) -> MissingPolicy {
        self.config.missing_policy
    }

    /// Find the rows of `table` whose `column` value lies strictly outside the fence.
    ///
    /// # Errors
    ///
    /// * `EmptyInput` if the table has no rows.
    /// * `InvalidColumn` if `column` is absent or categorical.
    /// * `NoObservations` if every value in the column is missing.
    /// * `MissingValues` under [`MissingPolicy::Reject`].
    pub fn scan(&self, table: &Table<T>, column: &str) -> Result<ScanResult<T>, IqrError> {
        ScanExecutor::run(table, column, &self.config)
    }

    /// Fence of `column` without filtering rows.
    pub fn fence(&self, table: &Table<T>, column: &str) -> Result<Fence<T>, IqrError> {
        ScanExecutor::prepare(table, column, &self.config).map(|p| p.fence)
    }

    /// Quartiles of `column`.
    pub fn quartiles(&self, table: &Table<T>, column: &str) -> Result<Quartiles<T>, IqrError> {
        ScanExecutor::prepare(table, column, &self.config).map(|p| p.quartiles)
    }

    /// Arbitrary quantile `p` of `column`, using the configured rule.
    pub fn quantile(&self, table: &Table<T>, column: &str, p: T) -> Result<T, IqrError> {
        Validator::validate_quantile(p)?;
        Validator::validate_table(table)?;
        let cells = Validator::numeric_column(table, column)?;
        let obs = Observations::extract(cells);
        Validator::validate_observations(&obs, column, self.config.missing_policy)?;
        let sorted = sorted_copy(&obs.values);
        self.config
            .quantile_method
            .evaluate(&sorted, p)
            .ok_or_else(|| IqrError::NoObservations {
                column: column.to_owned(),
            })
    }
}

impl<T: Float + Send + Sync> OutlierScanner<T> {
    /// Scan every numeric column of `table`.
    ///
    /// Columns whose values are all missing are listed in
    /// [`ScanReport::skipped`]; any other error fails the whole call.
    pub fn scan_all(&self, table: &Table<T>) -> Result<ScanReport<T>, IqrError> {
        ScanExecutor::run_all(table, &self.config)
    }
}

// ============================================================================
// Table-Level Analysis
// ============================================================================

/// Descriptive statistics for every column of `table`.
pub fn describe<T: Float>(table: &Table<T>) -> Result<TableSummary<T>, IqrError> {
    TableSummary::compute(table, QuantileMethod::Linear)
}

/// Pearson correlation matrix of the numeric columns of `table`.
pub fn correlation<T: Float>(table: &Table<T>) -> Result<CorrelationMatrix<T>, IqrError> {
    CorrelationMatrix::compute(table)
}

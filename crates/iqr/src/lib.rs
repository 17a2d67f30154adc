//! # IQR: Interquartile-Range Outlier Scanning for Tabular Data
//!
//! Load a table, describe it, and flag the rows whose value in a numeric
//! column falls outside Tukey's fence `[Q1 - 1.5·IQR, Q3 + 1.5·IQR]`.
//!
//! ## What is an IQR fence?
//!
//! The interquartile range `IQR = Q3 - Q1` is a robust measure of spread.
//! Values more than `k` interquartile ranges below the first quartile or
//! above the third quartile are conventionally treated as outliers; `k = 1.5`
//! gives the inner fence and `k = 3` the outer fence. Quartiles are estimated
//! by linear interpolation between order statistics.
//!
//! ## Quick Start
//!
//! ```rust
//! use iqr::prelude::*;
//!
//! let table = Table::from_columns(vec![
//!     Column::categorical("id", ["a", "b", "c", "d", "e", "f", "g", "h", "i"]),
//!     Column::numeric("value", [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 100.0]),
//! ])?;
//!
//! let scanner = Iqr::new().build()?;
//! let result = scanner.scan(&table, "value")?;
//!
//! assert_eq!(result.count, 1);
//! assert_eq!(result.indices, vec![8]);
//! assert_eq!((result.fence.lower, result.fence.upper), (-1.0, 7.0));
//!
//! println!("{}", result);
//! # Result::<(), IqrError>::Ok(())
//! ```
//!
//! ```text
//! Outlier Scan: value
//!   Observations: 9
//!   Quartiles:    Q1=2 Median=3 Q3=4
//!   IQR:          2
//!   Fence:        [-1, 7] (k=1.5)
//!   Outliers:     1 (0 below, 1 above)
//!
//!      Row          Value     Side
//! --------------------------------
//!        8       100.0000    above
//! ```
//!
//! ### Full Pipeline
//!
//! ```rust
//! use iqr::prelude::*;
//!
//! let csv = "city,temp,rain\nOslo,4.1,NA\nRome,15.2,0.8\nLima,18.9,0.1\nNuuk,-30.0,0.4\nCairo,21.5,0.0\n";
//! let table: Table<f64> = CsvLoader::new().load_str(csv)?;
//!
//! // Describe every column
//! let summary = describe(&table)?;
//! println!("{}", summary);
//!
//! // Scan every numeric column
//! let scanner = Iqr::new()
//!     .multiplier(1.5)                // Tukey's inner fence
//!     .quantile_method(Linear)        // Interpolated quartiles
//!     .missing_policy(Skip)           // Ignore missing cells
//!     .build()?;
//! let report = scanner.scan_all(&table)?;
//! println!("{}", report);
//!
//! // Pairwise correlations
//! println!("{}", correlation(&table)?);
//! # Result::<(), IqrError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `scan` returns `Result<ScanResult<T>, IqrError>`. It either succeeds with a
//! complete result or fails before producing any output:
//!
//! - **`EmptyInput`**: the table has no rows.
//! - **`InvalidColumn`**: the column does not exist or is not numeric.
//! - **`NoObservations`**: every value in the column is missing.
//! - **`MissingValues`**: a value is missing and `Reject` was requested.
//!
//! ```rust
//! use iqr::prelude::*;
//! # let table = Table::from_columns(vec![Column::numeric("x", [1.0, 2.0])])?;
//!
//! let scanner = Iqr::<f64>::new().build()?;
//! match scanner.scan(&table, "y") {
//!     Ok(result) => println!("{} outliers", result.count),
//!     Err(e) => eprintln!("Scan failed: {}", e),
//! }
//! # Result::<(), IqrError>::Ok(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): `scan_all` scans columns concurrently with rayon.
//! - `dev`: exposes the internal layers under `iqr::internals` for tests and benchmarks.

// Layer 1: Primitives - table model, errors and sorting.
mod primitives;

// Layer 2: Math - quantiles and moments.
mod math;

// Layer 3: Algorithms - quartiles and fences.
mod algorithms;

// Layer 4: Evaluation - describe and correlation.
mod evaluation;

// Layer 5: Engine - validation, execution and results.
mod engine;

// Layer 6: Adapters - CSV and JSON loaders.
mod adapters;

// High-level fluent API.
pub mod api;

// Standard IQR prelude.
pub mod prelude {
    pub use crate::api::{
        correlation, describe, CategoricalSummary, Cell, Column, ColumnData, ColumnKind,
        ColumnSummary, CorrelationMatrix, CsvLoader, Fence, IqrBuilder as Iqr, IqrError,
        JsonLoader,
        MissingPolicy::{self, Reject, Skip},
        NumericSummary, OutlierScanner,
        QuantileMethod::{self, Higher, Linear, Lower, Midpoint, Nearest},
        Quartiles, Row, ScanReport, ScanResult, Side, Table, TableSummary,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
}

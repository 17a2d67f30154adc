//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides table-level descriptive analysis that accompanies an
//! outlier scan: per-column summaries and the correlation matrix.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Descriptive statistics per column.
pub mod summary;

/// Pearson correlation matrix.
pub mod correlation;

//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates outlier scans by coordinating the table model,
//! quantile estimation and fences. It owns validation and result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scan execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for scans.
pub mod output;

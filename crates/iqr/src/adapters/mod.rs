//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer adapts external data sources into the in-memory [`Table`]
//! the engine works on:
//!
//! - **CSV**: Delimited text with header row and missing-value tokens
//! - **JSON**: Record arrays or columnar objects
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`Table`]: crate::primitives::table::Table

/// Column type inference.
pub mod infer;

/// CSV loader.
pub mod csv;

/// JSON loader.
pub mod json;

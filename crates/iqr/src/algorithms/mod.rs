//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the outlier rule itself: quartile estimation and
//! Tukey fences.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Quartiles and fences.
pub mod fence;

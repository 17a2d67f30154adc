//! Quartiles and Tukey fences.
//!
//! ## Purpose
//!
//! This module turns a sorted sample into its quartiles and derives the
//! fence `[Q1 - k * IQR, Q3 + k * IQR]` used to flag outliers.
//!
//! ## Design notes
//!
//! * **Strict**: A value is outside the fence only if it is strictly below the
//!   lower bound or strictly above the upper bound.
//! * **Degenerate fences**: When `IQR = 0` the fence collapses to a point; values
//!   equal to it are inside.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Quartiles**: Q1, median and Q3 estimated with a [`QuantileMethod`].
//! * **Multiplier**: `k = 1.5` gives Tukey's inner fence, `k = 3` the outer fence.
//!
//! ## Invariants
//!
//! * `q1 <= median <= q3`, hence `iqr >= 0`.
//! * `lower <= upper` for any non-negative multiplier.
//!
//! ## Non-goals
//!
//! * This module does not extract values from tables or handle missing data.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;
use serde::Serialize;

// Internal dependencies
use crate::math::quantile::QuantileMethod;

/// Tukey's conventional fence multiplier.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

// ============================================================================
// Quartiles
// ============================================================================

/// First quartile, median and third quartile of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles<T> {
    /// 25th percentile.
    pub q1: T,

    /// 50th percentile.
    pub median: T,

    /// 75th percentile.
    pub q3: T,
}

impl<T: Float> Quartiles<T> {
    /// Estimate quartiles of a sorted sample. `None` for an empty sample.
    pub fn from_sorted(sorted: &[T], method: QuantileMethod) -> Option<Self> {
        let quarter = T::from(0.25)?;
        let half = T::from(0.5)?;
        let three_quarters = T::from(0.75)?;
        Some(Self {
            q1: method.evaluate(sorted, quarter)?,
            median: method.evaluate(sorted, half)?,
            q3: method.evaluate(sorted, three_quarters)?,
        })
    }

    /// Interquartile range `Q3 - Q1`.
    #[inline]
    pub fn iqr(&self) -> T {
        self.q3 - self.q1
    }

    /// Fence at `multiplier` interquartile ranges beyond the quartiles.
    #[inline]
    pub fn fence(&self, multiplier: T) -> Fence<T> {
        Fence::from_quartiles(self.q1, self.q3, multiplier)
    }
}

// ============================================================================
// Fence
// ============================================================================

/// Which side of a fence a value falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Strictly below the lower bound.
    Below,
    /// Within `[lower, upper]`.
    Inside,
    /// Strictly above the upper bound.
    Above,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Below => write!(f, "below"),
            Self::Inside => write!(f, "inside"),
            Self::Above => write!(f, "above"),
        }
    }
}

/// Closed interval outside of which values are outliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fence<T> {
    /// Lower bound, `Q1 - k * IQR`.
    pub lower: T,

    /// Upper bound, `Q3 + k * IQR`.
    pub upper: T,
}

impl<T: Float> Fence<T> {
    /// Derive the fence from Q1, Q3 and a multiplier.
    pub fn from_quartiles(q1: T, q3: T, multiplier: T) -> Self {
        // An overflowing IQR times a zero multiplier would be NaN.
        let reach = if multiplier == T::zero() {
            T::zero()
        } else {
            multiplier * (q3 - q1)
        };
        Self {
            lower: q1 - reach,
            upper: q3 + reach,
        }
    }

    /// Classify a value against the fence.
    #[inline]
    pub fn side(&self, value: T) -> Side {
        if value < self.lower {
            Side::Below
        } else if value > self.upper {
            Side::Above
        } else {
            Side::Inside
        }
    }

    /// Check whether `value` is strictly outside the fence.
    #[inline]
    pub fn is_outlier(&self, value: T) -> bool {
        self.side(value) != Side::Inside
    }

    /// Width of the fence.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }
}

impl<T: Float + Display> Display for Fence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

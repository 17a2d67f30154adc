//! Quantile estimation on sorted samples.
//!
//! ## Purpose
//!
//! This module estimates the `p`-th quantile of a sorted sample. Quartiles
//! and every fence in the crate are built on it.
//!
//! ## Design notes
//!
//! * **Position**: All methods share the fractional rank `h = (n - 1) * p`.
//! * **Default**: `Linear` interpolates between neighbouring order statistics
//!   (Hyndman & Fan type 7), the definition used by R, NumPy and pandas.
//! * **Precondition**: Input must already be sorted and finite.
//! * **Range**: Interpolation never overflows, even between `f64::MIN` and `f64::MAX`.
//!
//! ## Key concepts
//!
//! With `j = floor(h)` and `g = h - j`:
//!
//! | Method   | Estimate                                  |
//! |----------|-------------------------------------------|
//! | Linear   | `x[j] + g * (x[j+1] - x[j])`              |
//! | Lower    | `x[j]`                                    |
//! | Higher   | `x[ceil(h)]`                              |
//! | Nearest  | `x[round(h)]`, ties to the even index     |
//! | Midpoint | `(x[j] + x[ceil(h)]) / 2`                 |
//!
//! ## Invariants
//!
//! * `p = 0` yields the minimum and `p = 1` the maximum for every method.
//! * Estimates are monotone in `p` and lie within `[x[0], x[n-1]]`.
//!
//! ## Non-goals
//!
//! * This module does not sort or clean its input.

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};

// ============================================================================
// Quantile Method
// ============================================================================

/// Rule for estimating a quantile between order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantileMethod {
    /// Linear interpolation between the two nearest order statistics.
    #[default]
    Linear,

    /// Lower of the two nearest order statistics.
    Lower,

    /// Higher of the two nearest order statistics.
    Higher,

    /// Nearest order statistic, ties to the even index.
    Nearest,

    /// Mean of the two nearest order statistics.
    Midpoint,
}

impl QuantileMethod {
    /// Estimate the `p`-th quantile of a sorted sample.
    ///
    /// Returns `None` if `sorted` is empty or `p` is outside `[0, 1]`.
    pub fn evaluate<T: Float>(&self, sorted: &[T], p: T) -> Option<T> {
        let n = sorted.len();
        if n == 0 || !(p >= T::zero() && p <= T::one()) {
            return None;
        }
        if n == 1 {
            return Some(sorted[0]);
        }

        let h = T::from(n - 1)? * p;
        let floor = h.floor();
        let g = h - floor;
        let j = floor.to_usize()?.min(n - 1);
        let k = (j + 1).min(n - 1);
        let hi = if g > T::zero() { k } else { j };

        let value = match self {
            Self::Linear => interpolate(sorted[j], sorted[k], g),
            Self::Lower => sorted[j],
            Self::Higher => sorted[hi],
            Self::Nearest => {
                let half = T::from(0.5)?;
                let idx = if g < half {
                    j
                } else if g > half || j % 2 == 1 {
                    k
                } else {
                    j
                };
                sorted[idx]
            }
            Self::Midpoint => interpolate(sorted[j], sorted[hi], T::from(0.5)?),
        };
        Some(value)
    }

    /// Parse a method name (`linear`, `lower`, `higher`, `nearest`, `midpoint`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "lower" => Some(Self::Lower),
            "higher" => Some(Self::Higher),
            "nearest" => Some(Self::Nearest),
            "midpoint" => Some(Self::Midpoint),
            _ => None,
        }
    }
}

/// Point at fraction `g` of the way from `lo` to `hi`, with `lo <= hi`.
///
/// Stays finite and within `[lo, hi]` even when `hi - lo` overflows.
fn interpolate<T: Float>(lo: T, hi: T, g: T) -> T {
    if g <= T::zero() || lo == hi {
        return lo;
    }
    let span = hi - lo;
    let value = if span.is_finite() {
        lo + g * span
    } else {
        (T::one() - g) * lo + g * hi
    };
    value.max(lo).min(hi)
}

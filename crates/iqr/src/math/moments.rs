//! Sample moments and product-moment correlation.
//!
//! Two-pass formulas are used throughout; inputs are assumed finite.

// External dependencies
use num_traits::Float;

/// Arithmetic mean. `None` for an empty sample.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Sample variance with an `n - 1` denominator. `None` for fewer than 2 values.
pub fn sample_variance<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    Some(ss / T::from(values.len() - 1)?)
}

/// Sample standard deviation with an `n - 1` denominator.
pub fn sample_std<T: Float>(values: &[T]) -> Option<T> {
    sample_variance(values).map(Float::sqrt)
}

/// Smallest and largest value. `None` for an empty sample.
pub fn min_max<T: Float>(values: &[T]) -> Option<(T, T)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Pearson correlation of paired samples.
///
/// Returns `None` when fewer than 2 pairs are given, the lengths differ, or
/// either side is constant.
pub fn pearson<T: Float>(x: &[T], y: &[T]) -> Option<T> {
    if x.len() != y.len() || x.len() < 2 || is_constant(x) || is_constant(y) {
        return None;
    }
    let mx = mean(x)?;
    let my = mean(y)?;

    // Deviations are scaled by their largest magnitude so squares cannot overflow.
    let scale_x = max_abs_deviation(x, mx);
    let scale_y = max_abs_deviation(y, my);
    if !(scale_x > T::zero() && scale_y > T::zero()) {
        return None;
    }

    let mut sxy = T::zero();
    let mut sxx = T::zero();
    let mut syy = T::zero();
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = (xi - mx) / scale_x;
        let dy = (yi - my) / scale_y;
        sxy = sxy + dx * dy;
        sxx = sxx + dx * dx;
        syy = syy + dy * dy;
    }

    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if !r.is_finite() {
        return None;
    }
    // Rounding can push |r| a hair past 1.
    Some(r.max(-T::one()).min(T::one()))
}

fn is_constant<T: Float>(values: &[T]) -> bool {
    values.iter().all(|&v| v == values[0])
}

fn max_abs_deviation<T: Float>(values: &[T], centre: T) -> T {
    values
        .iter()
        .fold(T::zero(), |acc, &v| acc.max((v - centre).abs()))
}

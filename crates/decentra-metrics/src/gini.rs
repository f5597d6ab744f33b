//! Gini coefficient of a non-negative distribution.
//!
//! The mean absolute difference averages `|x_i - x_j|` over all n² ordered
//! pairs, including `i == j`. Self pairs contribute zero but stay in the
//! denominator. The pairwise sum is evaluated in O(n log n) through the
//! sorted identity `Σ_{i,j} |x_i - x_j| = 2 Σ_k (2k - n + 1) x_(k)`.

use decentra_core::error::MetricError;
use ordered_float::OrderedFloat;

/// Compute `0.5 * mean_abs_diff(x) / mean(x)`.
///
/// Rejects empty input, negative or non-finite values, and a zero mean.
/// The result depends only on the multiset of values, not their order.
pub fn gini(x: &[f64]) -> Result<f64, MetricError> {
    if x.is_empty() {
        return Err(MetricError::EmptyDistribution);
    }
    if let Some(index) = x.iter().position(|v| !v.is_finite() || *v < 0.0) {
        return Err(MetricError::InvalidValue { index });
    }

    let mut sorted: Vec<OrderedFloat<f64>> = x.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();

    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().map(|v| v.0).sum();
    let mean = sum / n;
    if mean <= 0.0 {
        return Err(MetricError::DegenerateDistribution);
    }

    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(k, v)| (2.0 * k as f64 - n + 1.0) * v.0)
        .sum();
    let mean_abs_diff = 2.0 * weighted / (n * n);

    Ok((0.5 * mean_abs_diff / mean).max(0.0))
}

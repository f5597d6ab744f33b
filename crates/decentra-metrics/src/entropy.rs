//! Generalized (Rényi) entropy of pool block shares, in bits.
//!
//! `H_a(p) = log2(Σ p_i^a) / (1 - a)` over pools with a non-zero share.
//! Orders with a limit form are special-cased:
//! - `a = 1`: Shannon entropy, `-Σ p_i log2 p_i`
//! - `a = 0`: Hartley entropy, `log2 |{i : p_i > 0}|`
//! - `a = -1`: min-entropy, `-log2 max p_i` (the `a → ∞` limit)
//!
//! Other orders are summed in the log domain around the dominant share, so
//! any `i32` order stays finite.

use decentra_core::constants::{ENTROPY_ALPHA_HARTLEY, ENTROPY_ALPHA_MIN, ENTROPY_ALPHA_SHANNON};
use decentra_core::error::MetricError;
use decentra_core::types::PoolContributionMap;

/// Entropy of order `alpha` of the pool shares in `blocks_per_pool`.
pub fn entropy(blocks_per_pool: &PoolContributionMap, alpha: i32) -> Result<f64, MetricError> {
    if blocks_per_pool.is_empty() {
        return Err(MetricError::EmptyContributionMap);
    }
    let total = blocks_per_pool.total();
    if total == 0 {
        return Err(MetricError::ZeroTotal);
    }

    let total = total as f64;
    let shares: Vec<f64> = blocks_per_pool
        .iter()
        .filter(|(_, blocks)| *blocks > 0)
        .map(|(_, blocks)| blocks as f64 / total)
        .collect();

    let bits = match alpha {
        ENTROPY_ALPHA_SHANNON => -shares.iter().map(|p| p * p.log2()).sum::<f64>(),
        ENTROPY_ALPHA_HARTLEY => (shares.len() as f64).log2(),
        ENTROPY_ALPHA_MIN => {
            let max_share = shares.iter().copied().fold(0.0f64, f64::max);
            -max_share.log2()
        }
        _ => {
            let a = f64::from(alpha);
            let pivot = if alpha > 0 {
                shares.iter().copied().fold(0.0f64, f64::max)
            } else {
                shares.iter().copied().fold(1.0f64, f64::min)
            };
            // log2 Σ p^a = a·log2 p* + log2 Σ (p/p*)^a; every term is at most 1.
            let log_pivot = pivot.log2();
            let scaled: f64 = shares.iter().map(|p| (a * (p.log2() - log_pivot)).exp2()).sum();
            (a * log_pivot + scaled.log2()) / (1.0 - a)
        }
    };

    Ok(bits.max(0.0))
}

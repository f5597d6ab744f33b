//! Nakamoto coefficient of a per-pool block distribution.
//!
//! Pools are ranked by block count, largest first, with ties ranked by pool
//! name ascending. Pools are added in rank order while the cumulative block
//! count is still below half of the total; the check happens before each
//! addition, so the pool that crosses the threshold is always counted and the
//! result is the smallest `k` whose top-`k` share reaches 50%. Block counts
//! are summed as integers, so a share of exactly half always stops.

use decentra_core::constants::PERCENT;
use decentra_core::error::MetricError;
use decentra_core::types::{NakamotoResult, PoolContributionMap};

/// Pools ordered by block count descending, then by name ascending.
pub fn ranked_pools(blocks_per_pool: &PoolContributionMap) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = blocks_per_pool.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Count of top pools whose cumulative share reaches 50%, with that share.
///
/// If every pool is consumed first, the accumulated pair is returned as is.
pub fn nakamoto(blocks_per_pool: &PoolContributionMap) -> Result<NakamotoResult, MetricError> {
    if blocks_per_pool.is_empty() {
        return Err(MetricError::EmptyContributionMap);
    }
    let total = blocks_per_pool.total();
    if total == 0 {
        return Err(MetricError::ZeroTotal);
    }

    // Whole block counts keep "exactly half" exact.
    let total_blocks = u128::from(total);
    let mut count = 0usize;
    let mut cum_blocks: u128 = 0;
    for (_pool, blocks) in ranked_pools(blocks_per_pool) {
        if 2 * cum_blocks >= total_blocks {
            break;
        }
        count += 1;
        cum_blocks += u128::from(blocks);
    }

    Ok(NakamotoResult {
        count,
        cumulative_pct: PERCENT * cum_blocks as f64 / total as f64,
    })
}

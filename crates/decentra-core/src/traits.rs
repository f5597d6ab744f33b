//! Trait interfaces for Decentra.
//!
//! These traits define the contracts between crates:
//! - [`ConcentrationMetrics`] — pure metric math (decentra-metrics implements)
//! - [`BlockSource`] — per-timeframe pool contributions (decentra-ledger implements)

use crate::error::{LedgerError, MetricError};
use crate::ledger::Ledger;
use crate::timeframe::Timeframe;
use crate::types::{MetricsSnapshot, NakamotoResult, PoolContributionMap};

/// Pure computation of decentralization metrics.
///
/// Every method is stateless and deterministic; implementations hold no
/// mutable state, so a single instance may serve any number of callers.
pub trait ConcentrationMetrics: Send + Sync {
    /// Gini coefficient of a distribution of non-negative values.
    fn gini(&self, distribution: &[f64]) -> Result<f64, MetricError>;

    /// Minimal number of top pools holding at least half of all blocks,
    /// with their cumulative share in percent.
    fn nakamoto(&self, blocks_per_pool: &PoolContributionMap) -> Result<NakamotoResult, MetricError>;

    /// Generalized entropy of order `alpha` of the pool shares, in bits.
    fn entropy(&self, blocks_per_pool: &PoolContributionMap, alpha: i32) -> Result<f64, MetricError>;

    /// All metrics for one contribution map.
    ///
    /// Default implementation evaluates each metric in turn and fails on the
    /// first error; no partial snapshot is returned.
    fn snapshot(
        &self,
        blocks_per_pool: &PoolContributionMap,
        alpha: i32,
    ) -> Result<MetricsSnapshot, MetricError> {
        Ok(MetricsSnapshot {
            gini: self.gini(&blocks_per_pool.distribution())?,
            nakamoto: self.nakamoto(blocks_per_pool)?,
            entropy: self.entropy(blocks_per_pool, alpha)?,
            entropy_alpha: alpha,
            total_blocks: blocks_per_pool.total(),
            pools: blocks_per_pool.len(),
        })
    }
}

/// Source of mapped block production data.
///
/// Implementations return one contribution map per requested timeframe, in
/// the order requested. A timeframe with no blocks yields an empty map.
pub trait BlockSource {
    fn blocks_per_entity(
        &self,
        ledger: Ledger,
        timeframes: &[Timeframe],
    ) -> Result<Vec<(Timeframe, PoolContributionMap)>, LedgerError>;
}

//! Core data types: per-pool block contributions and metric results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Blocks produced per pool within one timeframe.
///
/// Backed by a `BTreeMap`, so iteration is in ascending pool-name order.
/// Inserting a pool that already exists adds to its count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolContributionMap(BTreeMap<String, u64>);

impl PoolContributionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `blocks` to `pool`.
    pub fn insert(&mut self, pool: impl Into<String>, blocks: u64) {
        let entry = self.0.entry(pool.into()).or_insert(0);
        *entry = entry.saturating_add(blocks);
    }

    /// Credit a single block to `pool`.
    pub fn record_block(&mut self, pool: impl Into<String>) {
        self.insert(pool, 1);
    }

    /// Blocks credited to `pool`, if present.
    pub fn get(&self, pool: &str) -> Option<u64> {
        self.0.get(pool).copied()
    }

    /// Total blocks across all pools.
    pub fn total(&self) -> u64 {
        self.0.values().fold(0u64, |acc, &v| acc.saturating_add(v))
    }

    /// Number of distinct pools.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(pool, blocks)` in ascending pool-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Block counts as a distribution, in pool-name order.
    pub fn distribution(&self) -> Vec<f64> {
        self.0.values().map(|&v| v as f64).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for PoolContributionMap {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (pool, blocks) in iter {
            map.insert(pool, blocks);
        }
        map
    }
}

/// Outcome of the Nakamoto coefficient computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakamotoResult {
    /// Number of top pools included.
    pub count: usize,
    /// Cumulative share of those pools, in percent.
    pub cumulative_pct: f64,
}

/// Every metric computed for one contribution map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub gini: f64,
    pub nakamoto: NakamotoResult,
    /// Entropy in bits.
    pub entropy: f64,
    pub entropy_alpha: i32,
    pub total_blocks: u64,
    pub pools: usize,
}

//! Metrics engine implementing the [`ConcentrationMetrics`] trait.
//!
//! A zero-sized, stateless wrapper around the metric functions in this crate,
//! so callers can depend on the trait and swap implementations in tests.
//! `snapshot` is the trait's default; the engine only supplies the metrics.

use decentra_core::error::MetricError;
use decentra_core::traits::ConcentrationMetrics;
use decentra_core::types::{NakamotoResult, PoolContributionMap};

use crate::{entropy, gini, nakamoto};

/// The production metrics calculator.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    /// Create a new MetricsEngine.
    pub fn new() -> Self {
        Self
    }
}

impl ConcentrationMetrics for MetricsEngine {
    fn gini(&self, distribution: &[f64]) -> Result<f64, MetricError> {
        gini::gini(distribution)
    }

    fn nakamoto(&self, blocks_per_pool: &PoolContributionMap) -> Result<NakamotoResult, MetricError> {
        nakamoto::nakamoto(blocks_per_pool)
    }

    fn entropy(&self, blocks_per_pool: &PoolContributionMap, alpha: i32) -> Result<f64, MetricError> {
        entropy::entropy(blocks_per_pool, alpha)
    }
}

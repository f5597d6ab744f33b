//! Mapped block records and their aggregation into per-timeframe maps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use decentra_core::timeframe::Timeframe;
use decentra_core::types::PoolContributionMap;

/// One produced block, already attributed to a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Production date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Pool identifier after address-to-pool mapping.
    pub pool: String,
}

impl BlockRecord {
    pub fn new(date: NaiveDate, pool: impl Into<String>) -> Self {
        Self {
            date,
            pool: pool.into(),
        }
    }
}

/// Count blocks per pool for each timeframe, preserving the requested order.
///
/// Timeframes may overlap (e.g. a year and one of its months); each record is
/// credited to every timeframe that contains it.
pub fn aggregate(records: &[BlockRecord], timeframes: &[Timeframe]) -> Vec<(Timeframe, PoolContributionMap)> {
    timeframes
        .iter()
        .map(|tf| {
            let map = records
                .iter()
                .filter(|r| tf.contains(r.date))
                .fold(PoolContributionMap::new(), |mut acc, r| {
                    acc.record_block(r.pool.as_str());
                    acc
                });
            (*tf, map)
        })
        .collect()
}

//! Shared test helpers for integration tests.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use decentra_core::constants::MAPPED_BLOCKS_FILE;
use decentra_core::ledger::Ledger;
use decentra_core::types::PoolContributionMap;
use decentra_ledger::BlockRecord;

/// Build a contribution map from `(pool, blocks)` pairs.
pub fn pools(entries: &[(&str, u64)]) -> PoolContributionMap {
    entries.iter().map(|(k, v)| (*k, *v)).collect()
}

/// A block produced by `pool` on `date` (`YYYY-MM-DD`).
pub fn block(date: &str, pool: &str) -> BlockRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    BlockRecord::new(date, pool)
}

/// Records for one month where each pool produces the given number of
/// blocks, spread over the first 28 days.
pub fn month_of_blocks(year: i32, month: u32, shares: &[(&str, u64)]) -> Vec<BlockRecord> {
    let mut records = Vec::new();
    for (pool, blocks) in shares {
        for i in 0..*blocks {
            let day = (i % 28) as u32 + 1;
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            records.push(BlockRecord::new(date, *pool));
        }
    }
    records
}

/// Write `records` to `<input_dir>/<ledger>/mapped_blocks.json`.
pub fn write_mapped_blocks(input_dir: &Path, ledger: Ledger, records: &[BlockRecord]) {
    let dir = input_dir.join(ledger.as_str());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(MAPPED_BLOCKS_FILE), serde_json::to_vec(records).unwrap()).unwrap();
}

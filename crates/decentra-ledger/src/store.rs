//! File-backed [`BlockSource`] with a per-ledger aggregate cache.
//!
//! Layout:
//! - `<input_dir>/<ledger>/mapped_blocks.json`: array of [`BlockRecord`]s.
//! - `<output_dir>/<ledger>/blocks_per_entity.json`: object mapping each
//!   aggregated timeframe to its `{ pool: blocks }` map.
//!
//! The cache is reused when it covers every requested timeframe, unless the
//! store was built with `force_parse`. Newly aggregated timeframes are merged
//! into the existing cache; a forced rebuild replaces it.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use decentra_core::constants::{BLOCKS_PER_ENTITY_FILE, MAPPED_BLOCKS_FILE};
use decentra_core::error::LedgerError;
use decentra_core::ledger::Ledger;
use decentra_core::timeframe::Timeframe;
use decentra_core::traits::BlockSource;
use decentra_core::types::PoolContributionMap;
use tracing::{debug, info, warn};

use crate::records::{aggregate, BlockRecord};

/// Cached aggregates keyed by timeframe string.
type AggregateCache = BTreeMap<String, PoolContributionMap>;

/// Mapped block data on disk.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    input_dir: PathBuf,
    output_dir: PathBuf,
    force_parse: bool,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> LedgerError + '_ {
    move |source| LedgerError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn json_error(path: &Path) -> impl FnOnce(serde_json::Error) -> LedgerError + '_ {
    move |source| LedgerError::Json {
        path: path.display().to_string(),
        source,
    }
}

impl LedgerStore {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, force_parse: bool) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            force_parse,
        }
    }

    /// Path to the mapped block records for `ledger`.
    pub fn mapped_blocks_path(&self, ledger: Ledger) -> PathBuf {
        self.input_dir.join(ledger.as_str()).join(MAPPED_BLOCKS_FILE)
    }

    /// Path to the aggregate cache for `ledger`.
    pub fn cache_path(&self, ledger: Ledger) -> PathBuf {
        self.output_dir.join(ledger.as_str()).join(BLOCKS_PER_ENTITY_FILE)
    }

    /// Load every mapped block record for `ledger`.
    pub fn load_records(&self, ledger: Ledger) -> Result<Vec<BlockRecord>, LedgerError> {
        let path = self.mapped_blocks_path(ledger);
        if !path.exists() {
            return Err(LedgerError::MissingInput {
                ledger: ledger.to_string(),
                path: path.display().to_string(),
            });
        }
        let file = File::open(&path).map_err(io_error(&path))?;
        let records: Vec<BlockRecord> =
            serde_json::from_reader(BufReader::new(file)).map_err(json_error(&path))?;
        info!(%ledger, records = records.len(), "loaded mapped blocks");
        Ok(records)
    }

    /// Read the aggregate cache, treating an unreadable cache as absent.
    fn load_cache(&self, ledger: Ledger) -> Option<AggregateCache> {
        let path = self.cache_path(ledger);
        let file = File::open(&path).ok()?;
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!(%ledger, path = %path.display(), "ignoring corrupt aggregate cache: {}", e);
                None
            }
        }
    }

    fn write_cache(&self, ledger: Ledger, cache: &AggregateCache) -> Result<(), LedgerError> {
        let path = self.cache_path(ledger);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let file = File::create(&path).map_err(io_error(&path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, cache).map_err(json_error(&path))?;
        writer.flush().map_err(io_error(&path))?;
        debug!(%ledger, entries = cache.len(), path = %path.display(), "wrote aggregate cache");
        Ok(())
    }
}

impl BlockSource for LedgerStore {
    fn blocks_per_entity(
        &self,
        ledger: Ledger,
        timeframes: &[Timeframe],
    ) -> Result<Vec<(Timeframe, PoolContributionMap)>, LedgerError> {
        let cached = if self.force_parse { None } else { self.load_cache(ledger) };

        if let Some(cache) = &cached {
            let hits: Option<Vec<_>> = timeframes
                .iter()
                .map(|tf| cache.get(&tf.to_string()).map(|m| (*tf, m.clone())))
                .collect();
            if let Some(hits) = hits {
                debug!(%ledger, timeframes = timeframes.len(), "using cached aggregates");
                return Ok(hits);
            }
        }

        let records = self.load_records(ledger)?;
        let aggregated = aggregate(&records, timeframes);

        let mut cache = cached.unwrap_or_default();
        for (tf, map) in &aggregated {
            cache.insert(tf.to_string(), map.clone());
        }
        self.write_cache(ledger, &cache)?;

        Ok(aggregated)
    }
}

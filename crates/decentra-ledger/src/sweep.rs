//! Metric sweep over every requested (ledger, timeframe) pair.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use decentra_core::error::LedgerError;
use decentra_core::ledger::Ledger;
use decentra_core::timeframe::Timeframe;
use decentra_core::traits::{BlockSource, ConcentrationMetrics};
use decentra_core::types::MetricsSnapshot;

/// One row of the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub ledger: Ledger,
    pub timeframe: Timeframe,
    pub gini: f64,
    pub nakamoto_count: usize,
    pub nakamoto_pct: f64,
    pub entropy: f64,
    pub entropy_alpha: i32,
    pub total_blocks: u64,
    pub pools: usize,
}

impl MetricsRow {
    pub fn new(ledger: Ledger, timeframe: Timeframe, snapshot: &MetricsSnapshot) -> Self {
        Self {
            ledger,
            timeframe,
            gini: snapshot.gini,
            nakamoto_count: snapshot.nakamoto.count,
            nakamoto_pct: snapshot.nakamoto.cumulative_pct,
            entropy: snapshot.entropy,
            entropy_alpha: snapshot.entropy_alpha,
            total_blocks: snapshot.total_blocks,
            pools: snapshot.pools,
        }
    }
}

/// Compute metrics for each ledger and timeframe.
///
/// Timeframes without blocks are skipped. A metric error for a single
/// timeframe is logged and that timeframe skipped; errors from the block
/// source abort the sweep.
pub fn analyze<S, M>(
    source: &S,
    metrics: &M,
    ledgers: &[Ledger],
    timeframes: &[Timeframe],
    entropy_alpha: i32,
) -> Result<Vec<MetricsRow>, LedgerError>
where
    S: BlockSource + ?Sized,
    M: ConcentrationMetrics + ?Sized,
{
    let mut rows = Vec::with_capacity(ledgers.len() * timeframes.len());

    for &ledger in ledgers {
        let per_timeframe = source.blocks_per_entity(ledger, timeframes)?;
        for (timeframe, blocks_per_pool) in per_timeframe {
            if blocks_per_pool.is_empty() {
                debug!(%ledger, %timeframe, "no blocks in timeframe");
                continue;
            }
            match metrics.snapshot(&blocks_per_pool, entropy_alpha) {
                Ok(snapshot) => {
                    trace!(
                        %ledger,
                        %timeframe,
                        pools = snapshot.pools,
                        total_blocks = snapshot.total_blocks,
                        gini = snapshot.gini,
                        nakamoto = snapshot.nakamoto.count,
                        entropy = snapshot.entropy,
                        "computed metrics snapshot"
                    );
                    rows.push(MetricsRow::new(ledger, timeframe, &snapshot));
                }
                Err(e) => warn!(%ledger, %timeframe, "skipping timeframe: {}", e),
            }
        }
        info!(%ledger, rows = rows.len(), "ledger analyzed");
    }

    Ok(rows)
}

/// Write `rows` as a pretty-printed JSON array, creating parent directories.
pub fn write_metrics(rows: &[MetricsRow], path: &Path) -> Result<(), LedgerError> {
    let io_error = |source| LedgerError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows).map_err(|source| LedgerError::Json {
        path: path.display().to_string(),
        source,
    })?;
    writer.flush().map_err(io_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use decentra_core::error::MetricError;
    use decentra_core::types::{NakamotoResult, PoolContributionMap};
    use decentra_metrics::MetricsEngine;

    /// In-memory source keyed by ledger and timeframe.
    struct MemorySource(HashMap<(Ledger, Timeframe), PoolContributionMap>);

    impl BlockSource for MemorySource {
        fn blocks_per_entity(
            &self,
            ledger: Ledger,
            timeframes: &[Timeframe],
        ) -> Result<Vec<(Timeframe, PoolContributionMap)>, LedgerError> {
            Ok(timeframes
                .iter()
                .map(|tf| (*tf, self.0.get(&(ledger, *tf)).cloned().unwrap_or_default()))
                .collect())
        }
    }

    struct FailingSource;

    impl BlockSource for FailingSource {
        fn blocks_per_entity(
            &self,
            ledger: Ledger,
            _timeframes: &[Timeframe],
        ) -> Result<Vec<(Timeframe, PoolContributionMap)>, LedgerError> {
            Err(LedgerError::MissingInput {
                ledger: ledger.to_string(),
                path: "nowhere".into(),
            })
        }
    }

    fn map(entries: &[(&str, u64)]) -> PoolContributionMap {
        entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn jan() -> Timeframe {
        Timeframe::month(2021, 1).unwrap()
    }

    fn feb() -> Timeframe {
        Timeframe::month(2021, 2).unwrap()
    }

    #[test]
    fn rows_follow_ledger_then_timeframe_order() {
        let source = MemorySource(HashMap::from([
            ((Ledger::Bitcoin, jan()), map(&[("A", 60), ("B", 40)])),
            ((Ledger::Bitcoin, feb()), map(&[("A", 30), ("B", 30), ("C", 40)])),
            ((Ledger::Zcash, jan()), map(&[("Z", 1)])),
        ]));
        let rows = analyze(
            &source,
            &MetricsEngine::new(),
            &[Ledger::Bitcoin, Ledger::Zcash],
            &[jan(), feb()],
            1,
        )
        .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].ledger, rows[0].timeframe), (Ledger::Bitcoin, jan()));
        assert_eq!((rows[0].nakamoto_count, rows[0].nakamoto_pct), (1, 60.0));
        assert_eq!((rows[1].nakamoto_count, rows[1].nakamoto_pct), (2, 70.0));
        assert_eq!(rows[2].ledger, Ledger::Zcash);
        assert_eq!(rows[2].gini, 0.0);
        assert_eq!(rows[2].total_blocks, 1);
    }

    #[test]
    fn empty_timeframes_are_skipped() {
        let source = MemorySource(HashMap::from([((Ledger::Dash, feb()), map(&[("A", 1)]))]));
        let rows = analyze(&source, &MetricsEngine::new(), &[Ledger::Dash], &[jan(), feb()], 1).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].timeframe, feb());
    }

    #[test]
    fn metric_errors_skip_only_that_timeframe() {
        let source = MemorySource(HashMap::from([
            ((Ledger::Dash, jan()), map(&[("A", 0)])),
            ((Ledger::Dash, feb()), map(&[("A", 2), ("B", 2)])),
        ]));
        let rows = analyze(&source, &MetricsEngine::new(), &[Ledger::Dash], &[jan(), feb()], 0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].timeframe, feb());
        assert_eq!(rows[0].entropy, 1.0);
        assert_eq!(rows[0].entropy_alpha, 0);
    }

    #[test]
    fn source_errors_abort() {
        let err = analyze(&FailingSource, &MetricsEngine::new(), &[Ledger::Tezos], &[jan()], 1).unwrap_err();
        assert!(matches!(err, LedgerError::MissingInput { .. }));
    }

    #[test]
    fn works_with_trait_objects() {
        struct Constant;
        impl ConcentrationMetrics for Constant {
            fn gini(&self, _: &[f64]) -> Result<f64, MetricError> {
                Ok(0.5)
            }
            fn nakamoto(&self, _: &PoolContributionMap) -> Result<NakamotoResult, MetricError> {
                Ok(NakamotoResult { count: 3, cumulative_pct: 51.0 })
            }
            fn entropy(&self, _: &PoolContributionMap, _: i32) -> Result<f64, MetricError> {
                Ok(2.0)
            }
        }

        let source = MemorySource(HashMap::from([((Ledger::Cardano, jan()), map(&[("A", 1)]))]));
        let src: &dyn BlockSource = &source;
        let metrics: &dyn ConcentrationMetrics = &Constant;
        let rows = analyze(src, metrics, &[Ledger::Cardano], &[jan()], 2).unwrap();
        assert_eq!(rows[0].gini, 0.5);
        assert_eq!(rows[0].nakamoto_count, 3);
        assert_eq!(rows[0].entropy, 2.0);
    }

    #[test]
    fn write_metrics_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("metrics.json");
        let source = MemorySource(HashMap::from([((Ledger::Bitcoin, jan()), map(&[("A", 60), ("B", 40)]))]));
        let rows = analyze(&source, &MetricsEngine::new(), &[Ledger::Bitcoin], &[jan()], 1).unwrap();

        write_metrics(&rows, &path).unwrap();
        let back: Vec<MetricsRow> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!((back[0].ledger, back[0].timeframe), (Ledger::Bitcoin, jan()));
        assert_eq!(back[0].nakamoto_count, 1);
        assert_eq!(back[0].nakamoto_pct, 60.0);
        assert!((back[0].entropy - rows[0].entropy).abs() < 1e-12);
        assert!(fs::read_to_string(&path).unwrap().contains("\"timeframe\": \"2021-01\""));
    }
}

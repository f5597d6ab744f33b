//! decentra — consensus decentralization analysis over mapped block data.
//!
//! Aggregates each selected ledger's blocks per timeframe, computes the Gini
//! coefficient, Nakamoto coefficient and generalized entropy, then writes a
//! JSON results file and prints a table.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use decentra_core::constants::DEFAULT_ENTROPY_ALPHA;
use decentra_core::ledger::Ledger;
use decentra_core::timeframe::Timeframe;
use decentra_ledger::{analyze, write_metrics, LedgerStore};
use decentra_metrics::MetricsEngine;
use tracing::info;

use crate::config::CliConfig;

/// Decentralization metrics for block-producing pools.
#[derive(Parser, Debug)]
#[command(
    name = "decentra",
    version,
    about = "Gini, Nakamoto and entropy metrics over mapped block production data"
)]
struct Args {
    /// The ledgers that will be analyzed (default: all supported ledgers)
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    ledgers: Vec<Ledger>,

    /// The timeframe that will be analyzed, as YYYY-MM-DD (day and / or month can be omitted)
    #[arg(long)]
    timeframe: Option<Timeframe>,

    /// Aggregate the mapped data again, even if cached aggregates exist
    #[arg(long)]
    force_parse: bool,

    /// Entropy order: -1 min, 0 Hartley, 1 Shannon, 2 collision
    #[arg(long, default_value_t = DEFAULT_ENTROPY_ALPHA, allow_negative_numbers = true)]
    entropy_alpha: i32,

    /// Directory holding <ledger>/mapped_blocks.json (default: $DECENTRA_INPUT_DIR or ./input)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory for aggregate caches and metrics.json (default: $DECENTRA_OUTPUT_DIR or ./output)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a CliConfig.
    fn into_config(self) -> CliConfig {
        let defaults = CliConfig::default();

        let requested = if self.ledgers.is_empty() { defaults.ledgers.clone() } else { self.ledgers };
        // Keep the requested order; drop repeats after the first.
        let mut ledgers: Vec<Ledger> = Vec::with_capacity(requested.len());
        for ledger in requested {
            if !ledgers.contains(&ledger) {
                ledgers.push(ledger);
            }
        }

        let timeframes = match self.timeframe {
            Some(tf) => vec![tf],
            None => defaults.timeframes.clone(),
        };

        CliConfig {
            input_dir: self.input_dir.unwrap_or(defaults.input_dir.clone()),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir.clone()),
            ledgers,
            timeframes,
            force_parse: self.force_parse,
            entropy_alpha: self.entropy_alpha,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config();
    init_logging(&config.log_level, &config.log_format);
    run(&config)
}

/// Aggregate, compute and persist metrics for every configured ledger.
fn run(config: &CliConfig) -> Result<()> {
    let names: Vec<&str> = config.ledgers.iter().map(Ledger::as_str).collect();
    info!("The ledgers that will be analyzed are: {}", names.join(","));
    info!(
        timeframes = config.timeframes.len(),
        entropy_alpha = config.entropy_alpha,
        force_parse = config.force_parse,
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting analysis"
    );

    let store = LedgerStore::new(&config.input_dir, &config.output_dir, config.force_parse);
    let engine = MetricsEngine::new();

    let rows = analyze(
        &store,
        &engine,
        &config.ledgers,
        &config.timeframes,
        config.entropy_alpha,
    )
    .context("analysis failed")?;

    let path = config.metrics_path();
    write_metrics(&rows, &path)
        .with_context(|| format!("failed to write metrics to {}", path.display()))?;

    print!("{}", output::render_table(&rows));
    info!(rows = rows.len(), path = %path.display(), "metrics written");
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Pass `format = "json"` for structured JSON output. Any other value
/// defaults to human-readable text. Logs go to stderr so the results table
/// on stdout stays clean.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["decentra"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]);
        assert_eq!(cfg.ledgers, Ledger::ALL.to_vec());
        assert_eq!(cfg.timeframes, Timeframe::default_sweep());
        assert_eq!(cfg.entropy_alpha, DEFAULT_ENTROPY_ALPHA);
        assert!(!cfg.force_parse);
        assert_eq!(cfg.log_format, "text");
    }

    #[test]
    fn ledgers_are_lowercased_and_deduplicated() {
        let cfg = parse(&["--ledgers", "Ethereum", "bitcoin", "ETHEREUM"]);
        assert_eq!(cfg.ledgers, vec![Ledger::Ethereum, Ledger::Bitcoin]);

        let cfg = parse(&["--ledgers", "zcash,dash"]);
        assert_eq!(cfg.ledgers, vec![Ledger::Zcash, Ledger::Dash]);
    }

    #[test]
    fn ledgers_keep_requested_order() {
        let cfg = parse(&["--ledgers", "tezos", "bitcoin", "tezos", "cardano", "BITCOIN"]);
        assert_eq!(cfg.ledgers, vec![Ledger::Tezos, Ledger::Bitcoin, Ledger::Cardano]);
    }

    #[test]
    fn unknown_ledger_rejected() {
        assert!(Args::try_parse_from(["decentra", "--ledgers", "solana"]).is_err());
    }

    #[test]
    fn single_timeframe() {
        let cfg = parse(&["--timeframe", "2021-03"]);
        assert_eq!(cfg.timeframes, vec![Timeframe::month(2021, 3).unwrap()]);
    }

    #[test]
    fn invalid_timeframe_rejected() {
        assert!(Args::try_parse_from(["decentra", "--timeframe", "2021-02-30"]).is_err());
        assert!(Args::try_parse_from(["decentra", "--timeframe", "March"]).is_err());
    }

    #[test]
    fn negative_entropy_alpha() {
        let cfg = parse(&["--entropy-alpha", "-1"]);
        assert_eq!(cfg.entropy_alpha, -1);
        let cfg = parse(&["--entropy-alpha=2", "--force-parse"]);
        assert_eq!(cfg.entropy_alpha, 2);
        assert!(cfg.force_parse);
    }

    #[test]
    fn explicit_dirs() {
        let cfg = parse(&["--input-dir", "/data/in", "--output-dir", "/data/out"]);
        assert_eq!(cfg.input_dir, PathBuf::from("/data/in"));
        assert_eq!(cfg.metrics_path(), PathBuf::from("/data/out/metrics.json"));
    }

    #[test]
    fn run_writes_metrics_file() {
        let dir = tempfile::tempdir().unwrap();
        let ledger_dir = dir.path().join("in").join("bitcoin");
        fs::create_dir_all(&ledger_dir).unwrap();
        fs::write(
            ledger_dir.join("mapped_blocks.json"),
            r#"[
                {"date":"2021-03-01","pool":"A"},
                {"date":"2021-03-02","pool":"A"},
                {"date":"2021-03-02","pool":"A"},
                {"date":"2021-03-05","pool":"B"},
                {"date":"2021-03-09","pool":"B"}
            ]"#,
        )
        .unwrap();

        let cfg = CliConfig {
            input_dir: dir.path().join("in"),
            output_dir: dir.path().join("out"),
            ledgers: vec![Ledger::Bitcoin],
            timeframes: vec![Timeframe::month(2021, 3).unwrap()],
            ..CliConfig::default()
        };
        run(&cfg).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(cfg.metrics_path()).unwrap()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["ledger"], "bitcoin");
        assert_eq!(rows[0]["timeframe"], "2021-03");
        assert_eq!(rows[0]["nakamoto_count"], 1);
        assert_eq!(rows[0]["nakamoto_pct"], 60.0);
        assert_eq!(rows[0]["total_blocks"], 5);
        assert!(dir.path().join("out").join("bitcoin").join("blocks_per_entity.json").exists());
    }

    #[test]
    fn run_fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CliConfig {
            input_dir: dir.path().join("in"),
            output_dir: dir.path().join("out"),
            ledgers: vec![Ledger::Litecoin],
            timeframes: vec![Timeframe::year(2020).unwrap()],
            ..CliConfig::default()
        };
        let err = run(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("litecoin"));
    }
}

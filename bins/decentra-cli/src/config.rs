//! Run configuration resolved from CLI flags and environment variables.

use std::path::PathBuf;

use decentra_core::constants::{DEFAULT_ENTROPY_ALPHA, ENV_INPUT_DIR, ENV_OUTPUT_DIR, METRICS_FILE};
use decentra_core::ledger::Ledger;
use decentra_core::timeframe::Timeframe;

/// Everything a single analysis run needs.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root of the per-ledger mapped block files.
    pub input_dir: PathBuf,
    /// Root for aggregate caches and the metrics file.
    pub output_dir: PathBuf,
    pub ledgers: Vec<Ledger>,
    pub timeframes: Vec<Timeframe>,
    /// Rebuild aggregates even when a cache exists.
    pub force_parse: bool,
    pub entropy_alpha: i32,
    /// Log level filter string (e.g. "info", "debug", "decentra_ledger=trace").
    pub log_level: String,
    /// "text" or "json".
    pub log_format: String,
}

/// `value` when set and non-empty, otherwise `fallback`.
pub fn resolve_dir(value: Option<String>, fallback: &str) -> PathBuf {
    value
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_dir: resolve_dir(std::env::var(ENV_INPUT_DIR).ok(), "input"),
            output_dir: resolve_dir(std::env::var(ENV_OUTPUT_DIR).ok(), "output"),
            ledgers: Ledger::ALL.to_vec(),
            timeframes: Timeframe::default_sweep(),
            force_parse: false,
            entropy_alpha: DEFAULT_ENTROPY_ALPHA,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl CliConfig {
    /// Path of the results file.
    pub fn metrics_path(&self) -> PathBuf {
        self.output_dir.join(METRICS_FILE)
    }
}

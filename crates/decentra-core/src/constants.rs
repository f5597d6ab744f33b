//! Analysis constants. Percentages are expressed on a 0–100 scale.

/// Cumulative share (percent) that the Nakamoto coefficient must reach.
pub const NAKAMOTO_THRESHOLD_PCT: f64 = 50.0;

/// Scale used when converting block shares to percentages.
pub const PERCENT: f64 = 100.0;

/// First year of the default monthly timeframe sweep (inclusive).
pub const START_YEAR: i32 = 2018;

/// Last year of the default monthly timeframe sweep (exclusive).
pub const END_YEAR: i32 = 2024;

/// Default entropy order: Shannon entropy.
pub const DEFAULT_ENTROPY_ALPHA: i32 = 1;

/// Entropy order selecting min-entropy.
pub const ENTROPY_ALPHA_MIN: i32 = -1;

/// Entropy order selecting Hartley (max) entropy.
pub const ENTROPY_ALPHA_HARTLEY: i32 = 0;

/// Entropy order selecting Shannon entropy.
pub const ENTROPY_ALPHA_SHANNON: i32 = 1;

/// Entropy order selecting collision entropy.
pub const ENTROPY_ALPHA_COLLISION: i32 = 2;

/// File name of the mapped block records inside each ledger input directory.
pub const MAPPED_BLOCKS_FILE: &str = "mapped_blocks.json";

/// File name of the per-timeframe aggregate cache inside each ledger output directory.
pub const BLOCKS_PER_ENTITY_FILE: &str = "blocks_per_entity.json";

/// File name of the metrics results written to the output directory.
pub const METRICS_FILE: &str = "metrics.json";

/// Environment variable overriding the default input directory.
pub const ENV_INPUT_DIR: &str = "DECENTRA_INPUT_DIR";

/// Environment variable overriding the default output directory.
pub const ENV_OUTPUT_DIR: &str = "DECENTRA_OUTPUT_DIR";

//! Error types for Decentra.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("empty distribution")] EmptyDistribution,
    #[error("invalid value at index {index}: must be finite and non-negative")] InvalidValue { index: usize },
    #[error("degenerate distribution: non-positive mean")] DegenerateDistribution,
    #[error("empty contribution map")] EmptyContributionMap,
    #[error("contribution map has zero total")] ZeroTotal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeframeError {
    #[error("malformed timeframe {0:?}: use YYYY-MM-DD (day and / or month can be omitted)")] Malformed(String),
    #[error("timeframe {0:?} is not a valid calendar date")] InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("unknown ledger: {0}")] UnknownLedger(String),
    #[error("no mapped data for {ledger} at {path}")] MissingInput { ledger: String, path: String },
    #[error("io error on {path}: {source}")] Io { path: String, source: std::io::Error },
    #[error("json error in {path}: {source}")] Json { path: String, source: serde_json::Error },
}

#[derive(Error, Debug)]
pub enum DecentraError {
    #[error(transparent)] Metric(#[from] MetricError),
    #[error(transparent)] Timeframe(#[from] TimeframeError),
    #[error(transparent)] Ledger(#[from] LedgerError),
}

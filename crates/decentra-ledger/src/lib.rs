//! # decentra-ledger
//! Loads mapped block records, aggregates them per timeframe, and runs the
//! metric sweep over (ledger, timeframe) pairs.

pub mod records;
pub mod store;
pub mod sweep;

pub use records::{aggregate, BlockRecord};
pub use store::LedgerStore;
pub use sweep::{analyze, write_metrics, MetricsRow};

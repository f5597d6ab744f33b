//! # decentra-core
//! Foundation types and traits for decentralization analysis.

pub mod constants;
pub mod error;
pub mod ledger;
pub mod timeframe;
pub mod traits;
pub mod types;

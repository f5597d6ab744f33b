//! # decentra-metrics — Decentralization metrics over block production.
//!
//! All metrics are pure functions of a per-pool block distribution:
//! - **Gini coefficient**: half the mean absolute difference over all n²
//!   ordered pairs (self pairs included), divided by the mean.
//! - **Nakamoto coefficient**: the number of largest pools that together
//!   produced at least 50% of the blocks. Ties in block count are ranked by
//!   pool name, ascending.
//! - **Generalized entropy**: Rényi entropy of the pool shares in bits, with
//!   Shannon (`alpha = 1`), Hartley (`0`) and min-entropy (`-1`) as special
//!   orders.

pub mod engine;
pub mod entropy;
pub mod gini;
pub mod nakamoto;

pub use engine::MetricsEngine;
pub use entropy::entropy;
pub use gini::gini;
pub use nakamoto::{nakamoto, ranked_pools};

//! Integration test suite for Decentra.
//!
//! Exercises the full path from mapped block files through aggregation and
//! the metric sweep, plus cross-crate properties of the metrics.

pub mod helpers;

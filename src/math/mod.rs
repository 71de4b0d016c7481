//! Mathematical utilities: descriptive statistics and quantiles.

pub mod stats;

pub use stats::*;

//! Reporting utilities: formatted terminal output for predictions and
//! cohort comparisons.

pub mod format;

pub use format::*;

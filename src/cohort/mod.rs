//! Cohort binning and statistics.
//!
//! Responsibilities:
//!
//! - assign age and income buckets, identically for reference rows and queries
//! - build the immutable reference dataset (fills + cuts + group assignment)
//! - filter by cohort key and summarize the peer probability distribution

pub mod bins;
pub mod reference;
pub mod stats;

pub use bins::*;
pub use reference::*;
pub use stats::*;

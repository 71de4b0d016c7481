//! Input/output helpers.
//!
//! - reference CSV ingest + validation (`dataset`)
//! - scoring report JSON read/write (`result`)

pub mod dataset;
pub mod result;

pub use dataset::*;
pub use result::*;

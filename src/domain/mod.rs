//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed feature schema and inbound records (`FEATURE_NAMES`, `FeatureRecord`)
//! - cohort labels (`AgeGroup`, `IncomeGroup`, `CohortKey`)
//! - scoring outputs (`PredictionResult`, `CohortSummary`, `ScoreReport`)

pub mod types;

pub use types::*;

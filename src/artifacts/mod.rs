//! Fitted model artifacts: imputer, scaler, classifier.
//!
//! All three are fitted upstream and loaded here as JSON files; this crate
//! never recomputes their statistics. The pipeline depends only on their
//! transform/predict contracts, not on how they were trained.

pub mod classifier;
pub mod imputer;
pub mod scaler;

pub use classifier::*;
pub use imputer::*;
pub use scaler::*;

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Read a JSON artifact file into a typed model.
pub(crate) fn read_json_artifact<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::artifact_missing(format!("Failed to open {what} '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::artifact_missing(format!("Invalid {what} '{}': {e}", path.display())))
}

/// Write a JSON artifact file (pretty-printed, for inspectability).
pub fn write_json_artifact<T: Serialize>(path: &Path, value: &T, what: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to create {what} '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| AppError::invalid_input(format!("Failed to write {what}: {e}")))
}

/// Check a fitted schema against the canonical feature schema.
///
/// The record side always presents the full fixed schema, so "applied fields
/// are a subset of the fitted schema" collapses to an exact ordered match.
pub(crate) fn ensure_schema(fields: &[String], what: &str) -> Result<(), AppError> {
    use crate::domain::FEATURE_NAMES;

    if fields.len() != FEATURE_NAMES.len() {
        return Err(AppError::schema_mismatch(format!(
            "{what} was fitted on {} fields, expected {}.",
            fields.len(),
            FEATURE_NAMES.len()
        )));
    }
    for (fitted, expected) in fields.iter().zip(FEATURE_NAMES.iter()) {
        if fitted != expected {
            return Err(AppError::schema_mismatch(format!(
                "{what} schema mismatch: fitted field `{fitted}` where `{expected}` was expected."
            )));
        }
    }
    Ok(())
}

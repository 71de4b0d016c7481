//! Read/write scoring report JSON files.
//!
//! The report JSON is the "portable" representation of one scoring run:
//! - prediction (probability + credit score)
//! - resolved cohort labels
//! - the cohort summary, including the raw peer sample for re-plotting
//!
//! The schema is defined by `domain::ScoreReport`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CohortKey, CohortSummary, PredictionResult, ScoreReport};
use crate::error::AppError;

/// Assemble the portable report from pipeline outputs.
pub fn build_report(
    prediction: &PredictionResult,
    cohort_key: Option<&CohortKey>,
    summary: &CohortSummary,
) -> ScoreReport {
    ScoreReport {
        tool: "cscore".to_string(),
        prediction: *prediction,
        age_group: cohort_key.map(|k| k.age.label().to_string()),
        income_group: cohort_key.map(|k| k.income.label().to_string()),
        cohort: summary.clone(),
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &ScoreReport) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::invalid_input(format!("Failed to write report JSON: {e}")))
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<ScoreReport, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to open report JSON '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::invalid_input(format!("Invalid report JSON: {e}")))
}

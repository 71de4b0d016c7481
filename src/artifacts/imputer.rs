//! Fitted imputation artifact.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::artifacts::{ensure_schema, read_json_artifact};
use crate::domain::FeatureRecord;
use crate::error::AppError;

/// Per-field fill values fixed at fit time (median for continuous fields,
/// mode for count-like fields). Stateless after fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImputationModel {
    /// Fitted schema, in order.
    pub fields: Vec<String>,
    /// Fill value per field, parallel to `fields`.
    pub fill_values: Vec<f64>,
}

impl ImputationModel {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let model: Self = read_json_artifact(path, "imputer artifact")?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation of the artifact itself.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.fields.len() != self.fill_values.len() {
            return Err(AppError::artifact_missing(format!(
                "Imputer artifact is inconsistent: {} fields but {} fill values.",
                self.fields.len(),
                self.fill_values.len()
            )));
        }
        if let Some(idx) = self.fill_values.iter().position(|v| !v.is_finite()) {
            return Err(AppError::artifact_missing(format!(
                "Imputer fill value for `{}` is not finite.",
                self.fields[idx]
            )));
        }
        Ok(())
    }

    /// Fill missing record fields from the fitted statistics.
    ///
    /// Fails with a schema mismatch if the record's field set/order differs
    /// from the fitted schema. Pure; field order is preserved.
    pub fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>, AppError> {
        ensure_schema(&self.fields, "Imputer")?;
        Ok(record
            .values()
            .iter()
            .zip(self.fill_values.iter())
            .map(|(value, fill)| value.unwrap_or(*fill))
            .collect())
    }
}

//! Fitted scaling artifact.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::artifacts::{ensure_schema, read_json_artifact};
use crate::domain::ScaledVector;
use crate::error::AppError;

/// Per-field standardization parameters fixed at fit time.
///
/// Must only be applied to imputer output: the transform assumes a fully
/// filled vector in fitted field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingModel {
    /// Fitted schema, in order.
    pub fields: Vec<String>,
    /// Per-field centering value, parallel to `fields`.
    pub means: Vec<f64>,
    /// Per-field scale divisor, parallel to `fields`. Strictly positive.
    pub scales: Vec<f64>,
}

impl ScalingModel {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let model: Self = read_json_artifact(path, "scaler artifact")?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation of the artifact itself.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.fields.len() != self.means.len() || self.fields.len() != self.scales.len() {
            return Err(AppError::artifact_missing(format!(
                "Scaler artifact is inconsistent: {} fields, {} means, {} scales.",
                self.fields.len(),
                self.means.len(),
                self.scales.len()
            )));
        }
        if let Some(idx) = self.means.iter().position(|v| !v.is_finite()) {
            return Err(AppError::artifact_missing(format!(
                "Scaler mean for `{}` is not finite.",
                self.fields[idx]
            )));
        }
        if let Some(idx) = self.scales.iter().position(|v| !v.is_finite() || *v <= 0.0) {
            return Err(AppError::artifact_missing(format!(
                "Scaler scale for `{}` must be finite and > 0.",
                self.fields[idx]
            )));
        }
        Ok(())
    }

    /// Standardize an imputed vector: `(x - mean) / scale`, order preserved.
    pub fn transform(&self, values: &[f64]) -> Result<ScaledVector, AppError> {
        ensure_schema(&self.fields, "Scaler")?;
        if values.len() != self.fields.len() {
            return Err(AppError::schema_mismatch(format!(
                "Scaler expects {} values, got {}.",
                self.fields.len(),
                values.len()
            )));
        }
        let scaled = values
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();
        Ok(ScaledVector(scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FEATURE_NAMES;

    fn fitted() -> ScalingModel {
        ScalingModel {
            fields: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            means: vec![0.5; 10],
            scales: vec![2.0; 10],
        }
    }

    #[test]
    fn standardizes_in_place_order() {
        let values = vec![0.5, 2.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 4.5];
        let scaled = fitted().transform(&values).unwrap();
        assert_eq!(scaled.len(), 10);
        assert!((scaled.as_slice()[0] - 0.0).abs() < 1e-12);
        assert!((scaled.as_slice()[1] - 1.0).abs() < 1e-12);
        assert!((scaled.as_slice()[9] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_wrong_value_count() {
        let err = fitted().transform(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::SchemaMismatch);
    }

    #[test]
    fn validate_rejects_zero_scale() {
        let mut model = fitted();
        model.scales[3] = 0.0;
        assert!(model.validate().is_err());
    }
}

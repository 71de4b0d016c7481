//! Classifier artifact and the probability-model contract.

use std::path::Path;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::artifacts::read_json_artifact;
use crate::domain::ScaledVector;
use crate::error::AppError;

/// Contract for the opaque binary classifier: scaled features in,
/// positive-class (default) probability out.
///
/// The scoring pipeline depends only on this trait, so tests and future
/// artifact formats can substitute their own implementations.
pub trait ProbabilityModel {
    /// `P(default = 1 | x)`.
    ///
    /// Implementations must accept exactly the scaled feature vector shape
    /// they were fitted on and fail with an inference error otherwise.
    fn predict_proba(&self, x: &ScaledVector) -> Result<f64, AppError>;
}

/// Logistic classifier artifact: a weight vector and intercept over the
/// scaled features. The training procedure is upstream's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let model: Self = read_json_artifact(path, "classifier artifact")?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation of the artifact itself.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.weights.is_empty() {
            return Err(AppError::artifact_missing(
                "Classifier artifact has no weights.",
            ));
        }
        if self.weights.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err(AppError::artifact_missing(
                "Classifier artifact has non-finite parameters.",
            ));
        }
        Ok(())
    }
}

impl ProbabilityModel for LogisticModel {
    fn predict_proba(&self, x: &ScaledVector) -> Result<f64, AppError> {
        if x.len() != self.weights.len() {
            return Err(AppError::inference(format!(
                "Classifier expects {} features, got {}.",
                self.weights.len(),
                x.len()
            )));
        }
        let w = DVector::from_column_slice(&self.weights);
        let v = DVector::from_column_slice(x.as_slice());
        let z = w.dot(&v) + self.intercept;
        if !z.is_finite() {
            return Err(AppError::inference("Non-finite classifier response."));
        }
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn fitted() -> LogisticModel {
        LogisticModel {
            weights: vec![0.3, 0.4, 0.5],
            intercept: -0.1,
        }
    }

    #[test]
    fn zero_response_is_even_odds() {
        let model = LogisticModel {
            weights: vec![1.0, 1.0],
            intercept: 0.0,
        };
        let p = model.predict_proba(&ScaledVector(vec![0.0, 0.0])).unwrap();
        assert!((p - 0.5).abs() < TOL);
    }

    #[test]
    fn predicts_known_logits() {
        let model = fitted();
        // z = 0.3 - 0.1 = 0.2
        let p = model
            .predict_proba(&ScaledVector(vec![1.0, 0.0, 0.0]))
            .unwrap();
        assert!((p - 1.0 / (1.0 + (-0.2_f64).exp())).abs() < TOL);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let model = fitted();
        for v in [-50.0, -1.0, 0.0, 1.0, 50.0] {
            let p = model
                .predict_proba(&ScaledVector(vec![v, v, v]))
                .unwrap();
            assert!((0.0..=1.0).contains(&p), "p={p} out of range");
        }
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err = fitted()
            .predict_proba(&ScaledVector(vec![1.0, 2.0]))
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Inference);
    }

    #[test]
    fn validate_rejects_empty_weights() {
        let model = LogisticModel {
            weights: vec![],
            intercept: 0.0,
        };
        assert!(model.validate().is_err());
    }
}

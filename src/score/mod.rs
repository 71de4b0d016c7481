//! Probability inference and the credit-score mapping.
//!
//! The probability-to-score map is a fixed business policy, not a statistical
//! calibration: p = 0 is the best score (850), p = 1 the worst (350), linear
//! in between. The constants must be reproduced exactly.

use crate::artifacts::ProbabilityModel;
use crate::domain::{PredictionResult, ScaledVector};
use crate::error::AppError;

/// Score assigned at `p = 1` (certain default).
pub const SCORE_WORST: f64 = 350.0;
/// Score assigned at `p = 0` (no default risk).
pub const SCORE_BEST: f64 = 850.0;

/// Affine map over the inverted probability: `350 + 500 * (1 - p)`.
pub fn credit_score(probability: f64) -> f64 {
    SCORE_WORST + (SCORE_BEST - SCORE_WORST) * (1.0 - probability)
}

/// Run the classifier on a prepared vector and map to a credit score.
///
/// Out-of-range classifier output is clamped to [0, 1] at this boundary
/// rather than propagated; non-finite output is an inference failure. Pure
/// function of its inputs.
pub fn score(model: &impl ProbabilityModel, features: &ScaledVector) -> Result<PredictionResult, AppError> {
    let raw = model.predict_proba(features)?;
    if !raw.is_finite() {
        return Err(AppError::inference(
            "Classifier returned a non-finite probability.",
        ));
    }
    let probability = raw.clamp(0.0, 1.0);
    Ok(PredictionResult {
        probability_of_default: probability,
        credit_score: credit_score(probability),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    /// Classifier stub returning a fixed value.
    struct Fixed(f64);

    impl ProbabilityModel for Fixed {
        fn predict_proba(&self, _x: &ScaledVector) -> Result<f64, AppError> {
            Ok(self.0)
        }
    }

    fn empty_features() -> ScaledVector {
        ScaledVector(vec![0.0; 10])
    }

    #[test]
    fn boundary_scores_are_exact() {
        assert!((credit_score(0.0) - 850.0).abs() < TOL);
        assert!((credit_score(1.0) - 350.0).abs() < TOL);
        assert!((credit_score(0.5) - 600.0).abs() < TOL);
    }

    #[test]
    fn score_is_strictly_decreasing_in_probability() {
        let mut last = f64::INFINITY;
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let s = credit_score(p);
            assert!(s < last, "score not decreasing at p={p}");
            assert!((SCORE_WORST..=SCORE_BEST).contains(&s));
            last = s;
        }
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        let result = score(&Fixed(1.7), &empty_features()).unwrap();
        assert!((result.probability_of_default - 1.0).abs() < TOL);
        assert!((result.credit_score - 350.0).abs() < TOL);

        let result = score(&Fixed(-0.3), &empty_features()).unwrap();
        assert!((result.probability_of_default - 0.0).abs() < TOL);
        assert!((result.credit_score - 850.0).abs() < TOL);
    }

    #[test]
    fn non_finite_probability_fails() {
        let err = score(&Fixed(f64::NAN), &empty_features()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Inference);
    }

    #[test]
    fn scoring_twice_is_identical() {
        let a = score(&Fixed(0.12), &empty_features()).unwrap();
        let b = score(&Fixed(0.12), &empty_features()).unwrap();
        assert_eq!(a, b);
        assert!((a.credit_score - 790.0).abs() < TOL);
    }
}

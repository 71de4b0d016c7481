//! Synthetic reference data and demonstration artifacts.
//!
//! The scoring path itself has no randomness; generation exists so the tool
//! runs end-to-end without shipped model files and so tests have a
//! deterministic corpus. Everything here is seeded.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{LogNormal, Normal};

use crate::artifacts::{ImputationModel, LogisticModel, ScalingModel};
use crate::domain::{FEATURE_NAMES, RawReferenceRow};
use crate::error::AppError;

/// Share of generated rows with a missing income value.
const MISSING_INCOME_RATE: f64 = 0.05;
/// Share of generated rows with a missing dependents value.
const MISSING_DEPENDENTS_RATE: f64 = 0.025;

/// Configuration for reference-sample generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            seed: 42,
        }
    }
}

/// Generate a synthetic historical corpus.
///
/// Ages are roughly normal around the high 40s, incomes log-normal, and each
/// row's default probability comes from a latent risk score so that the
/// generated distribution has realistic shape (most mass near zero, a thin
/// high-risk tail).
pub fn generate_reference(config: &SampleConfig) -> Result<Vec<RawReferenceRow>, AppError> {
    if config.count == 0 {
        return Err(AppError::invalid_input("Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let age_dist = Normal::<f64>::new(48.0, 15.0)
        .map_err(|e| AppError::invalid_input(format!("Age distribution error: {e}")))?;
    // ln-scale median ≈ e^8.55 ≈ 5200, matching mid-market monthly incomes.
    let income_dist = LogNormal::<f64>::new(8.55, 0.55)
        .map_err(|e| AppError::invalid_input(format!("Income distribution error: {e}")))?;
    let noise = Normal::<f64>::new(0.0, 0.35)
        .map_err(|e| AppError::invalid_input(format!("Noise distribution error: {e}")))?;

    let mut rows = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let age = age_dist.sample(&mut rng).round().clamp(21.0, 105.0);
        let income = income_dist.sample(&mut rng).round();
        let dependents = (rng.r#gen::<f64>().powi(2) * 5.0).floor();

        // Latent risk drivers; only the resulting probability is stored.
        let utilization = (age_dist.sample(&mut rng).abs() / 100.0).min(2.0);
        let past_due = (rng.r#gen::<f64>().powi(3) * 4.0).floor();
        let z = -2.6 + 1.8 * utilization + 0.55 * past_due - 0.00006 * income
            - 0.012 * (age - 45.0)
            + noise.sample(&mut rng);
        let probability = (1.0 / (1.0 + (-z).exp())).clamp(0.001, 0.999);

        rows.push(RawReferenceRow {
            age,
            monthly_income: if rng.gen_bool(MISSING_INCOME_RATE) {
                None
            } else {
                Some(income)
            },
            dependents: if rng.gen_bool(MISSING_DEPENDENTS_RATE) {
                None
            } else {
                Some(dependents)
            },
            probability,
        });
    }

    Ok(rows)
}

/// The three fitted artifacts bundled for demo generation.
#[derive(Debug, Clone)]
pub struct DemoArtifacts {
    pub imputer: ImputationModel,
    pub scaler: ScalingModel,
    pub classifier: LogisticModel,
}

/// Demonstration artifacts with plausible fitted parameters.
///
/// Fill values, means, and scales approximate the training corpus the real
/// artifacts were fitted on; classifier weights push utilization and
/// delinquency counts toward default and income/age away from it.
pub fn demo_artifacts() -> DemoArtifacts {
    let fields: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();

    let imputer = ImputationModel {
        fields: fields.clone(),
        fill_values: vec![0.154, 52.0, 0.0, 0.366, 5400.0, 8.0, 0.0, 1.0, 0.0, 0.0],
    };

    let scaler = ScalingModel {
        fields,
        means: vec![0.32, 52.3, 0.42, 1.78, 6670.0, 8.45, 0.27, 1.02, 0.24, 0.76],
        scales: vec![1.45, 14.77, 2.2, 110.0, 7800.0, 5.14, 2.1, 1.13, 2.05, 1.12],
    };

    let classifier = LogisticModel {
        weights: vec![0.85, -0.35, 0.55, 0.08, -0.28, -0.05, 0.95, 0.04, 0.50, 0.10],
        intercept: -2.35,
    };

    DemoArtifacts {
        imputer,
        scaler,
        classifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::build_reference;

    #[test]
    fn generation_is_deterministic_by_seed() {
        let config = SampleConfig {
            count: 200,
            seed: 7,
        };
        let a = generate_reference(&config).unwrap();
        let b = generate_reference(&config).unwrap();
        assert_eq!(a, b);

        let other = generate_reference(&SampleConfig {
            count: 200,
            seed: 8,
        })
        .unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn generated_rows_are_well_formed() {
        let rows = generate_reference(&SampleConfig {
            count: 500,
            seed: 42,
        })
        .unwrap();
        assert_eq!(rows.len(), 500);
        for row in &rows {
            assert!((21.0..=105.0).contains(&row.age));
            assert!((0.0..=1.0).contains(&row.probability));
            if let Some(income) = row.monthly_income {
                assert!(income > 0.0);
            }
        }
        // Missingness exists but is rare.
        let missing_income = rows.iter().filter(|r| r.monthly_income.is_none()).count();
        assert!(missing_income > 0);
        assert!(missing_income < rows.len() / 10);
    }

    #[test]
    fn generated_corpus_builds_and_round_trips_groups() {
        let rows = generate_reference(&SampleConfig {
            count: 400,
            seed: 42,
        })
        .unwrap();
        let dataset = build_reference(rows).unwrap();
        // Full-corpus round-trip consistency law.
        for row in &dataset.rows {
            assert_eq!(row.income_group, dataset.income_cuts.assign(row.monthly_income));
        }
    }

    #[test]
    fn demo_artifacts_validate() {
        let demo = demo_artifacts();
        demo.imputer.validate().unwrap();
        demo.scaler.validate().unwrap();
        demo.classifier.validate().unwrap();
        assert_eq!(demo.classifier.weights.len(), FEATURE_NAMES.len());
    }
}

//! Shared scoring pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load artifacts + reference (once) -> preprocess -> infer -> bin -> summarize
//!
//! Front-ends then focus on presentation (printing vs exporting).

use std::path::{Path, PathBuf};

use crate::artifacts::{ImputationModel, LogisticModel, ProbabilityModel, ScalingModel};
use crate::cohort::{ReferenceDataset, age_group, summarize};
use crate::domain::{CohortKey, CohortSummary, FeatureRecord, PredictionResult};
use crate::error::AppError;
use crate::io::dataset::{RowError, load_reference_csv};
use crate::preprocess::prepare;
use crate::score::score;

/// Locations of the three model artifacts and the reference dataset.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub imputer: PathBuf,
    pub scaler: PathBuf,
    pub classifier: PathBuf,
    pub reference: PathBuf,
}

impl ArtifactPaths {
    /// Conventional artifact file names under a single directory.
    pub fn in_dir(dir: &Path, reference: PathBuf) -> Self {
        Self {
            imputer: dir.join("imputer.json"),
            scaler: dir.join("scaler.json"),
            classifier: dir.join("classifier.json"),
            reference,
        }
    }
}

/// Process-wide immutable scoring state: created once at startup, passed by
/// reference into every scoring call, never mutated.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub imputer: ImputationModel,
    pub scaler: ScalingModel,
    pub classifier: LogisticModel,
    pub reference: ReferenceDataset,
}

/// Context plus load-time diagnostics (skipped reference rows).
#[derive(Debug, Clone)]
pub struct LoadedContext {
    pub context: ScoringContext,
    pub rows_read: usize,
    pub rows_used: usize,
    pub row_errors: Vec<RowError>,
}

/// Load all artifacts and the reference dataset.
///
/// Any absent file is reported in a single message; scoring stays
/// unavailable for this process lifetime (no retry loop; restart instead).
pub fn load_context(paths: &ArtifactPaths) -> Result<LoadedContext, AppError> {
    let missing: Vec<String> = [
        &paths.imputer,
        &paths.scaler,
        &paths.classifier,
        &paths.reference,
    ]
    .iter()
    .filter(|p| !p.exists())
    .map(|p| format!("'{}'", p.display()))
    .collect();
    if !missing.is_empty() {
        return Err(AppError::artifact_missing(format!(
            "Model files not found: {}. Run `cscore gen` to create demo artifacts, or point --artifacts/--data at the real ones.",
            missing.join(", ")
        )));
    }

    let imputer = ImputationModel::load(&paths.imputer)?;
    let scaler = ScalingModel::load(&paths.scaler)?;
    let classifier = LogisticModel::load(&paths.classifier)?;
    let ingest = load_reference_csv(&paths.reference)?;

    Ok(LoadedContext {
        context: ScoringContext {
            imputer,
            scaler,
            classifier,
            reference: ingest.dataset,
        },
        rows_read: ingest.rows_read,
        rows_used: ingest.rows_used,
        row_errors: ingest.row_errors,
    })
}

/// All computed outputs of a single scoring run.
#[derive(Debug, Clone)]
pub struct ScoreOutput {
    pub prediction: PredictionResult,
    /// `None` when the subject falls outside every reference bucket.
    pub cohort_key: Option<CohortKey>,
    pub summary: CohortSummary,
}

/// Execute the full scoring pipeline against a loaded context.
pub fn run_score(ctx: &ScoringContext, record: &FeatureRecord) -> Result<ScoreOutput, AppError> {
    run_score_with(&ctx.imputer, &ctx.scaler, &ctx.classifier, &ctx.reference, record)
}

/// Pipeline body, generic over the classifier so tests can substitute stubs.
pub fn run_score_with(
    imputer: &ImputationModel,
    scaler: &ScalingModel,
    classifier: &impl ProbabilityModel,
    reference: &ReferenceDataset,
    record: &FeatureRecord,
) -> Result<ScoreOutput, AppError> {
    let scaled = prepare(record, imputer, scaler)?;
    let prediction = score(classifier, &scaled)?;

    // Cohort binning uses the raw age and income as reported; a fill value
    // would place the subject in a cohort they never claimed to be in.
    let cohort_key = match (record.age, record.monthly_income) {
        (Some(age), Some(income)) => match (age_group(age), reference.income_cuts.assign(income)) {
            (Some(age_bucket), Some(income_bucket)) => Some(CohortKey {
                age: age_bucket,
                income: income_bucket,
            }),
            _ => None,
        },
        _ => None,
    };

    let summary = match &cohort_key {
        Some(key) => summarize(reference, key),
        None => CohortSummary::empty(),
    };

    Ok(ScoreOutput {
        prediction,
        cohort_key,
        summary,
    })
}

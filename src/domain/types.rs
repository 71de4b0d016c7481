//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON for downstream rendering
//! - reloaded later for re-plotting or comparisons

use serde::{Deserialize, Serialize};

/// Canonical feature schema: the ten model inputs, in fitted order.
///
/// These are the column names of the delinquency dataset the preprocessing
/// artifacts were fitted on. The imputer and scaler carry this schema in their
/// artifact files; a mismatch is a contract violation, not a recoverable state.
pub const FEATURE_NAMES: [&str; 10] = [
    "RevolvingUtilizationOfUnsecuredLines",
    "age",
    "NumberOfTime30-59DaysPastDueNotWorse",
    "DebtRatio",
    "MonthlyIncome",
    "NumberOfOpenCreditLinesAndLoans",
    "NumberOfTimes90DaysLate",
    "NumberRealEstateLoansOrLines",
    "NumberOfTime60-89DaysPastDueNotWorse",
    "NumberOfDependents",
];

/// A single scoring request: ten named numeric fields in schema order.
///
/// `None` marks a missing value, to be filled by the fitted imputer during
/// preprocessing. Cohort binning uses the raw `age` and `monthly_income`
/// values as reported, never the fill values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub revolving_utilization: Option<f64>,
    pub age: Option<f64>,
    pub past_due_30_59: Option<f64>,
    pub debt_ratio: Option<f64>,
    pub monthly_income: Option<f64>,
    pub open_credit_lines: Option<f64>,
    pub times_90_days_late: Option<f64>,
    pub real_estate_loans: Option<f64>,
    pub past_due_60_89: Option<f64>,
    pub dependents: Option<f64>,
}

impl FeatureRecord {
    /// Field values in schema order (parallel to `FEATURE_NAMES`).
    pub fn values(&self) -> [Option<f64>; 10] {
        [
            self.revolving_utilization,
            self.age,
            self.past_due_30_59,
            self.debt_ratio,
            self.monthly_income,
            self.open_credit_lines,
            self.times_90_days_late,
            self.real_estate_loans,
            self.past_due_60_89,
            self.dependents,
        ]
    }
}

/// Model-ready features: imputed and scaled, schema order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledVector(pub Vec<f64>);

impl ScaledVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Fixed age buckets: left-closed right-open intervals over
/// 20/30/40/50/60/70/80/90/110. Ages outside [20, 110) have no group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    A21_30,
    A31_40,
    A41_50,
    A51_60,
    A61_70,
    A71_80,
    A81_90,
    A91Plus,
}

impl AgeGroup {
    /// Human-readable bucket label for terminal output and exports.
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::A21_30 => "21-30",
            AgeGroup::A31_40 => "31-40",
            AgeGroup::A41_50 => "41-50",
            AgeGroup::A51_60 => "51-60",
            AgeGroup::A61_70 => "61-70",
            AgeGroup::A71_80 => "71-80",
            AgeGroup::A81_90 => "81-90",
            AgeGroup::A91Plus => "91+",
        }
    }
}

/// Income buckets.
///
/// The first four labels are quantile-derived; the last five are the fixed
/// absolute fallback ranges. A reference dataset uses exactly one family,
/// decided once at load time by `cohort::bins::IncomeCuts::derive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeGroup {
    Low,
    Medium,
    High,
    VeryHigh,
    UpTo2500,
    To5000,
    To7500,
    To10000,
    Above10000,
}

impl IncomeGroup {
    /// Human-readable bucket label for terminal output and exports.
    pub fn label(self) -> &'static str {
        match self {
            IncomeGroup::Low => "Low",
            IncomeGroup::Medium => "Medium",
            IncomeGroup::High => "High",
            IncomeGroup::VeryHigh => "Very High",
            IncomeGroup::UpTo2500 => "0-2500",
            IncomeGroup::To5000 => "2501-5000",
            IncomeGroup::To7500 => "5001-7500",
            IncomeGroup::To10000 => "7501-10000",
            IncomeGroup::Above10000 => "10001+",
        }
    }
}

/// The pair that selects a peer cohort. Must be computed identically for
/// reference rows and live queries, or comparisons are meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortKey {
    pub age: AgeGroup,
    pub income: IncomeGroup,
}

/// Scoring output: positive-class probability plus the mapped credit score.
///
/// Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// `P(default = 1)` for the scored record, in [0, 1].
    pub probability_of_default: f64,
    /// Affine map of the inverted probability onto [350, 850].
    pub credit_score: f64,
}

/// Descriptive statistics over a cohort's default probabilities.
///
/// Quartiles use linear interpolation; `std` is the sample standard deviation
/// (ddof = 1), reported as 0.0 for a single-row cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Peer-comparison output for one cohort.
///
/// `sample_size == 0` is a first-class state (no comparison data), not an
/// error; callers must render it distinctly from a scoring failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub sample_size: usize,
    pub stats: Option<DescriptiveStats>,
    /// Matching probabilities in dataset order, for distribution plots.
    pub probabilities: Vec<f64>,
}

impl CohortSummary {
    pub fn empty() -> Self {
        Self {
            sample_size: 0,
            stats: None,
            probabilities: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sample_size == 0
    }
}

/// A historical row as parsed from the comparison file, before load-time fills.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReferenceRow {
    pub age: f64,
    pub monthly_income: Option<f64>,
    pub dependents: Option<f64>,
    /// Default probability previously computed for this row upstream.
    pub probability: f64,
}

/// A saved scoring report (JSON export): prediction + cohort comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub tool: String,
    pub prediction: PredictionResult,
    pub age_group: Option<String>,
    pub income_group: Option<String>,
    pub cohort: CohortSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_schema_order() {
        let record = FeatureRecord {
            revolving_utilization: Some(0.76),
            age: Some(45.0),
            past_due_30_59: Some(2.0),
            debt_ratio: Some(0.8),
            monthly_income: Some(6000.0),
            open_credit_lines: Some(13.0),
            times_90_days_late: Some(0.0),
            real_estate_loans: Some(6.0),
            past_due_60_89: Some(0.0),
            dependents: Some(2.0),
        };
        let values = record.values();
        assert_eq!(values.len(), FEATURE_NAMES.len());
        assert_eq!(values[0], Some(0.76));
        assert_eq!(values[4], Some(6000.0));
        assert_eq!(values[9], Some(2.0));
    }

    #[test]
    fn group_labels_match_bucket_names() {
        assert_eq!(AgeGroup::A21_30.label(), "21-30");
        assert_eq!(AgeGroup::A91Plus.label(), "91+");
        assert_eq!(IncomeGroup::VeryHigh.label(), "Very High");
        assert_eq!(IncomeGroup::Above10000.label(), "10001+");
    }
}

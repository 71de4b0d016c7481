//! Terminal formatting for scoring runs.
//!
//! We keep formatting code in one place so:
//! - the scoring/statistics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{CohortKey, CohortSummary, PredictionResult};
use crate::io::dataset::RowError;

/// Format the prediction metrics block.
///
/// The score is shown as a whole number (truncated, matching how scores are
/// quoted); the probability as a percentage.
pub fn format_prediction(prediction: &PredictionResult) -> String {
    let mut out = String::new();
    out.push_str("=== cscore - Credit Score & Risk Predictor ===\n");
    out.push_str(&format!(
        "Estimated credit score: {}\n",
        prediction.credit_score.trunc() as i64
    ));
    out.push_str(&format!(
        "Probability of default: {:.2}%\n",
        prediction.probability_of_default * 100.0
    ));
    out
}

/// Format the cohort comparison block.
///
/// An empty cohort (or a query with no cohort key) renders the explicit
/// "no comparison data" state; it is not an error.
pub fn format_cohort(key: Option<&CohortKey>, summary: &CohortSummary) -> String {
    let mut out = String::new();
    out.push_str("=== How you compare ===\n");

    let Some(key) = key else {
        out.push_str("No comparison data found for your specific age and income group.\n");
        return out;
    };

    out.push_str(&format!(
        "Cohort: age {} | income {}\n",
        key.age.label(),
        key.income.label()
    ));

    if summary.is_empty() {
        out.push_str("No comparison data found for your specific age and income group.\n");
        return out;
    }

    out.push_str(&format!(
        "Stats for the {} people in your comparison group:\n",
        summary.sample_size
    ));
    if let Some(stats) = &summary.stats {
        out.push_str(&format!("  count  {}\n", stats.count));
        out.push_str(&format!("  mean   {:.4}\n", stats.mean));
        out.push_str(&format!("  std    {:.4}\n", stats.std));
        out.push_str(&format!("  min    {:.4}\n", stats.min));
        out.push_str(&format!("  25%    {:.4}\n", stats.q25));
        out.push_str(&format!("  50%    {:.4}\n", stats.median));
        out.push_str(&format!("  75%    {:.4}\n", stats.q75));
        out.push_str(&format!("  max    {:.4}\n", stats.max));
    }
    out
}

/// Summarize skipped reference rows for stderr. `None` when nothing was
/// skipped.
pub fn format_row_errors(row_errors: &[RowError]) -> Option<String> {
    if row_errors.is_empty() {
        return None;
    }
    let first = &row_errors[0];
    Some(format!(
        "warning: skipped {} malformed reference row(s); first at line {}: {}",
        row_errors.len(),
        first.line,
        first.message
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgeGroup, IncomeGroup};
    use crate::math::stats::describe;

    #[test]
    fn prediction_block_shows_truncated_score_and_percent() {
        let out = format_prediction(&PredictionResult {
            probability_of_default: 0.12,
            credit_score: 790.0,
        });
        assert!(out.contains("Estimated credit score: 790"));
        assert!(out.contains("Probability of default: 12.00%"));
    }

    #[test]
    fn cohort_block_lists_group_statistics() {
        let probabilities = vec![0.1, 0.2, 0.3];
        let summary = CohortSummary {
            sample_size: 3,
            stats: describe(&probabilities),
            probabilities,
        };
        let key = CohortKey {
            age: AgeGroup::A41_50,
            income: IncomeGroup::Medium,
        };
        let out = format_cohort(Some(&key), &summary);
        assert!(out.contains("Cohort: age 41-50 | income Medium"));
        assert!(out.contains("Stats for the 3 people"));
        assert!(out.contains("mean   0.2000"));
        assert!(out.contains("50%    0.2000"));
    }

    #[test]
    fn empty_cohort_renders_no_comparison_state() {
        let key = CohortKey {
            age: AgeGroup::A91Plus,
            income: IncomeGroup::VeryHigh,
        };
        let out = format_cohort(Some(&key), &CohortSummary::empty());
        assert!(out.contains("No comparison data found"));

        let out = format_cohort(None, &CohortSummary::empty());
        assert!(out.contains("No comparison data found"));
    }

    #[test]
    fn row_error_summary_is_optional() {
        assert!(format_row_errors(&[]).is_none());
        let errors = vec![
            RowError {
                line: 7,
                message: "Invalid numeric value for `age`: 'x'".to_string(),
            },
            RowError {
                line: 9,
                message: "Probability 1.7 is outside [0, 1].".to_string(),
            },
        ];
        let out = format_row_errors(&errors).unwrap();
        assert!(out.contains("skipped 2"));
        assert!(out.contains("line 7"));
    }
}

//! Cohort filtering and descriptive statistics.

use crate::cohort::reference::ReferenceDataset;
use crate::domain::{CohortKey, CohortSummary};
use crate::math::stats::describe;

/// Summarize the peer cohort selected by `key`.
///
/// An empty filter is a first-class result (`sample_size = 0`), never an
/// error; the dataset is only read, never mutated.
pub fn summarize(dataset: &ReferenceDataset, key: &CohortKey) -> CohortSummary {
    let probabilities: Vec<f64> = dataset
        .rows
        .iter()
        .filter(|r| r.age_group == Some(key.age) && r.income_group == Some(key.income))
        .map(|r| r.probability)
        .collect();

    if probabilities.is_empty() {
        return CohortSummary::empty();
    }

    CohortSummary {
        sample_size: probabilities.len(),
        stats: describe(&probabilities),
        probabilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::build_reference;
    use crate::domain::{AgeGroup, IncomeGroup, RawReferenceRow};

    fn dataset() -> ReferenceDataset {
        // Incomes spread widely enough for quartile cuts; probabilities are
        // distinct so ordering is observable.
        let raw = vec![
            RawReferenceRow { age: 45.0, monthly_income: Some(1000.0), dependents: Some(0.0), probability: 0.30 },
            RawReferenceRow { age: 42.0, monthly_income: Some(2000.0), dependents: Some(1.0), probability: 0.20 },
            RawReferenceRow { age: 48.0, monthly_income: Some(3000.0), dependents: Some(0.0), probability: 0.10 },
            RawReferenceRow { age: 44.0, monthly_income: Some(4000.0), dependents: Some(2.0), probability: 0.40 },
            RawReferenceRow { age: 65.0, monthly_income: Some(5000.0), dependents: Some(0.0), probability: 0.50 },
            RawReferenceRow { age: 46.0, monthly_income: Some(6000.0), dependents: Some(1.0), probability: 0.25 },
            RawReferenceRow { age: 41.0, monthly_income: Some(7000.0), dependents: Some(0.0), probability: 0.15 },
            RawReferenceRow { age: 43.0, monthly_income: Some(8000.0), dependents: Some(3.0), probability: 0.35 },
            RawReferenceRow { age: 47.0, monthly_income: Some(9000.0), dependents: Some(0.0), probability: 0.05 },
        ];
        build_reference(raw).unwrap()
    }

    #[test]
    fn filters_on_both_group_labels() {
        let dataset = dataset();
        // Quartile edges over 1000..=9000: [1000, 3000, 5000, 7000, 9000].
        // Cohort (41-50, Low): incomes 1000, 2000, 3000, all with ages in 41-50.
        let summary = summarize(
            &dataset,
            &CohortKey { age: AgeGroup::A41_50, income: IncomeGroup::Low },
        );
        assert_eq!(summary.sample_size, 3);
        // Dataset order preserved for plotting.
        assert_eq!(summary.probabilities, vec![0.30, 0.20, 0.10]);

        let stats = summary.stats.unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 0.20).abs() < 1e-12);
        assert!((stats.min - 0.10).abs() < 1e-12);
        assert!((stats.median - 0.20).abs() < 1e-12);
        assert!((stats.max - 0.30).abs() < 1e-12);
    }

    #[test]
    fn age_match_alone_is_not_enough() {
        let dataset = dataset();
        // Medium covers (3000, 5000]: incomes 4000 (age 44) and 5000 (age 65).
        // Only the age-44 row survives the combined filter.
        let summary = summarize(
            &dataset,
            &CohortKey { age: AgeGroup::A41_50, income: IncomeGroup::Medium },
        );
        assert_eq!(summary.sample_size, 1);
        assert_eq!(summary.probabilities, vec![0.40]);
    }

    #[test]
    fn empty_cohort_is_a_result_not_an_error() {
        let dataset = dataset();
        let summary = summarize(
            &dataset,
            &CohortKey { age: AgeGroup::A91Plus, income: IncomeGroup::VeryHigh },
        );
        assert_eq!(summary.sample_size, 0);
        assert!(summary.is_empty());
        assert!(summary.stats.is_none());
        assert!(summary.probabilities.is_empty());
    }

    #[test]
    fn summarize_does_not_mutate_the_dataset() {
        let dataset = dataset();
        let before = dataset.clone();
        let _ = summarize(
            &dataset,
            &CohortKey { age: AgeGroup::A41_50, income: IncomeGroup::Low },
        );
        assert_eq!(dataset, before);
    }
}

//! Reference dataset build: load-time fills, cut derivation, group assignment.
//!
//! This is the pure half of dataset loading (the CSV adapter lives in
//! `io::dataset`). Building is a one-shot derivation:
//!
//! 1. fill missing comparison columns the way the corpus was prepared
//!    upstream (median income, mode dependents)
//! 2. derive income cut points over the filled incomes
//! 3. assign every row's age and income groups with the same binner used for
//!    live queries
//!
//! The result is immutable: built once per process, read-only after.

use serde::{Deserialize, Serialize};

use crate::cohort::bins::{IncomeCuts, age_group};
use crate::domain::{AgeGroup, IncomeGroup, RawReferenceRow};
use crate::error::AppError;
use crate::math::stats::{quantile_sorted, sort_ascending};

/// A historical row after fills and group assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub age: f64,
    pub monthly_income: f64,
    pub dependents: f64,
    pub probability: f64,
    pub age_group: Option<AgeGroup>,
    pub income_group: Option<IncomeGroup>,
}

/// The immutable comparison corpus plus the cut points its income groups were
/// derived with. Queries must bin through `income_cuts`, never fresh ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataset {
    pub rows: Vec<ReferenceRow>,
    pub income_cuts: IncomeCuts,
}

impl ReferenceDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the reference dataset from parsed rows.
pub fn build_reference(raw: Vec<RawReferenceRow>) -> Result<ReferenceDataset, AppError> {
    if raw.is_empty() {
        return Err(AppError::invalid_input("Reference dataset has no rows."));
    }

    let present_incomes: Vec<f64> = raw.iter().filter_map(|r| r.monthly_income).collect();
    let present_dependents: Vec<f64> = raw.iter().filter_map(|r| r.dependents).collect();

    // A column with no observed values at all keeps NaN fills: the affected
    // rows then land in no income group rather than a fabricated one.
    let income_fill = median(&present_incomes).unwrap_or(f64::NAN);
    let dependents_fill = mode(&present_dependents).unwrap_or(f64::NAN);

    let filled_incomes: Vec<f64> = raw
        .iter()
        .map(|r| r.monthly_income.unwrap_or(income_fill))
        .collect();
    let income_cuts = IncomeCuts::derive(&filled_incomes);

    let rows = raw
        .into_iter()
        .zip(filled_incomes)
        .map(|(r, income)| ReferenceRow {
            age: r.age,
            monthly_income: income,
            dependents: r.dependents.unwrap_or(dependents_fill),
            probability: r.probability,
            age_group: age_group(r.age),
            income_group: income_cuts.assign(income),
        })
        .collect();

    Ok(ReferenceDataset { rows, income_cuts })
}

/// Median of the observed values. `None` when nothing was observed.
fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sort_ascending(&mut sorted);
    quantile_sorted(&sorted, 0.5)
}

/// Most frequent value, smallest winning ties. `None` when nothing observed.
fn mode(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sort_ascending(&mut sorted);

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut idx = 0usize;
    while idx < sorted.len() {
        let value = sorted[idx];
        let mut run = 0usize;
        while idx < sorted.len() && sorted[idx] == value {
            run += 1;
            idx += 1;
        }
        // Strictly greater keeps the smallest value on ties (ascending scan).
        if run > best_count {
            best = value;
            best_count = run;
        }
    }
    Some(best)
}

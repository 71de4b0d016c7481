//! Age and income bucket assignment.
//!
//! Binning must be identical between reference-dataset load time and query
//! time, or cohort comparisons are meaningless. The decision rules are
//! explicit and testable:
//!
//! - age buckets are fixed, left-closed right-open
//! - income buckets are quartile-derived when the reference distribution
//!   yields strictly increasing edges, else a fixed absolute scale
//! - anything outside all buckets has no group, never a silently wrong one

use serde::{Deserialize, Serialize};

use crate::domain::{AgeGroup, IncomeGroup};
use crate::math::stats::{quantile_sorted, sort_ascending};

/// Age bucket boundaries (years), left-closed right-open.
const AGE_EDGES: [f64; 9] = [20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 110.0];

/// Bucket labels parallel to the intervals of `AGE_EDGES`.
const AGE_GROUPS: [AgeGroup; 8] = [
    AgeGroup::A21_30,
    AgeGroup::A31_40,
    AgeGroup::A41_50,
    AgeGroup::A51_60,
    AgeGroup::A61_70,
    AgeGroup::A71_80,
    AgeGroup::A81_90,
    AgeGroup::A91Plus,
];

/// Assign the fixed age bucket for an age in years.
///
/// Ages below 20 or at/above 110 (and non-finite ages) have no bucket.
pub fn age_group(age: f64) -> Option<AgeGroup> {
    if !age.is_finite() {
        return None;
    }
    for (i, edges) in AGE_EDGES.windows(2).enumerate() {
        if age >= edges[0] && age < edges[1] {
            return Some(AGE_GROUPS[i]);
        }
    }
    None
}

/// Quartile bucket labels, lowest income first.
const QUARTILE_GROUPS: [IncomeGroup; 4] = [
    IncomeGroup::Low,
    IncomeGroup::Medium,
    IncomeGroup::High,
    IncomeGroup::VeryHigh,
];

/// Fixed fallback boundaries, left-closed right-open with an open top bucket.
const FIXED_EDGES: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// Bucket labels for the fixed scale; the last covers `[10000, ∞)`.
const FIXED_GROUPS: [IncomeGroup; 5] = [
    IncomeGroup::UpTo2500,
    IncomeGroup::To5000,
    IncomeGroup::To7500,
    IncomeGroup::To10000,
    IncomeGroup::Above10000,
];

/// Income cut points, decided once per reference dataset and reused verbatim
/// for every query. Quartiles are never recomputed from a single-point sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IncomeCuts {
    /// Quantile edges at 0/25/50/75/100% of the reference income
    /// distribution. Buckets are right-closed with the lowest edge included,
    /// matching how the edges were derived.
    Quartile { edges: [f64; 5] },
    /// Absolute ranges, used when the reference distribution is too
    /// degenerate to produce four distinct quartile buckets.
    Fixed,
}

impl IncomeCuts {
    /// Derive cut points from a reference income distribution.
    ///
    /// Falls back to the fixed scale iff the five quantile edges are not
    /// strictly increasing (the explicit form of "too little variance for
    /// four distinct buckets").
    pub fn derive(incomes: &[f64]) -> IncomeCuts {
        let mut sorted: Vec<f64> = incomes.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return IncomeCuts::Fixed;
        }
        sort_ascending(&mut sorted);

        let mut edges = [0.0; 5];
        for (i, q) in [0.0, 0.25, 0.5, 0.75, 1.0].iter().enumerate() {
            match quantile_sorted(&sorted, *q) {
                Some(v) => edges[i] = v,
                None => return IncomeCuts::Fixed,
            }
        }
        if edges.windows(2).all(|pair| pair[1] > pair[0]) {
            IncomeCuts::Quartile { edges }
        } else {
            IncomeCuts::Fixed
        }
    }

    /// Assign the income bucket under these cuts.
    ///
    /// Quartile path: right-closed intervals `(edges[i], edges[i+1]]` with the
    /// lowest edge included; income outside `[edges[0], edges[4]]` has no
    /// bucket. Fixed path: left-closed right-open ranges with an open top;
    /// negative income has no bucket.
    pub fn assign(&self, income: f64) -> Option<IncomeGroup> {
        if !income.is_finite() {
            return None;
        }
        match self {
            IncomeCuts::Quartile { edges } => {
                if income < edges[0] || income > edges[4] {
                    return None;
                }
                for (i, group) in QUARTILE_GROUPS.iter().enumerate() {
                    if income <= edges[i + 1] {
                        return Some(*group);
                    }
                }
                None
            }
            IncomeCuts::Fixed => {
                if income < FIXED_EDGES[0] {
                    return None;
                }
                for (i, group) in FIXED_GROUPS.iter().take(4).enumerate() {
                    if income < FIXED_EDGES[i + 1] {
                        return Some(*group);
                    }
                }
                Some(IncomeGroup::Above10000)
            }
        }
    }
}

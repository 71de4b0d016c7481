//! Feature preprocessing: imputation followed by scaling.
//!
//! Design goals:
//! - **Strict schema**: a field-name mismatch against either fitted artifact
//!   is a contract violation, surfaced immediately
//! - **Deterministic**: identical record + identical artifacts means an
//!   identical scaled vector
//! - **Separation of concerns**: no inference or binning logic here

use crate::artifacts::{ImputationModel, ScalingModel};
use crate::domain::{FeatureRecord, ScaledVector};
use crate::error::AppError;

/// Turn an inbound record into a model-ready vector.
///
/// Imputation fills `None` fields from the fitted statistics; scaling
/// standardizes the filled vector. Field order is preserved throughout.
pub fn prepare(
    record: &FeatureRecord,
    imputer: &ImputationModel,
    scaler: &ScalingModel,
) -> Result<ScaledVector, AppError> {
    let filled = imputer.transform(record)?;
    scaler.transform(&filled)
}

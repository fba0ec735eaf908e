//! EstimateRoiHandler - Query handler behind the ROI calculator.

use crate::domain::roi::{RoiAssumptions, RoiError, RoiEstimator, RoiInputs, RoiProjection};

/// Raw slider values as sent by the client.
#[derive(Debug, Clone, Copy)]
pub struct EstimateRoiQuery {
    pub monthly_patient_volume: i64,
    pub conversion_rate_percent: i64,
    pub cost_savings_percent: i64,
}

/// Result of a successful estimate.
#[derive(Debug, Clone, Copy)]
pub struct EstimateRoiResult {
    pub inputs: RoiInputs,
    pub projection: RoiProjection,
}

/// Handler for ROI estimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateRoiHandler {
    estimator: RoiEstimator,
}

impl EstimateRoiHandler {
    pub fn new(estimator: RoiEstimator) -> Self {
        Self { estimator }
    }

    pub fn assumptions(&self) -> RoiAssumptions {
        *self.estimator.assumptions()
    }

    /// Range-checks the inputs, then estimates.
    pub fn handle(&self, query: EstimateRoiQuery) -> Result<EstimateRoiResult, RoiError> {
        let inputs = RoiInputs::try_new(
            query.monthly_patient_volume,
            query.conversion_rate_percent,
            query.cost_savings_percent,
        )?;

        Ok(EstimateRoiResult {
            inputs,
            projection: self.estimator.estimate(&inputs),
        })
    }
}

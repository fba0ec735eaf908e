//! Request and response DTOs for ROI endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::roi::EstimateRoiResult;
use crate::domain::roi::{
    RoiAssumptions, RoiInputs, CONVERSION_RATE_RANGE, COST_SAVINGS_RANGE, PATIENT_VOLUME_RANGE,
};

/// Slider positions. Missing fields take the calculator's initial values.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRoiRequest {
    #[serde(default = "default_volume")]
    pub monthly_patient_volume: i64,
    #[serde(default = "default_conversion")]
    pub conversion_rate_percent: i64,
    #[serde(default = "default_savings")]
    pub cost_savings_percent: i64,
}

fn default_volume() -> i64 {
    RoiInputs::default().monthly_patient_volume() as i64
}

fn default_conversion() -> i64 {
    RoiInputs::default().conversion_rate().value() as i64
}

fn default_savings() -> i64 {
    RoiInputs::default().cost_savings().value() as i64
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputsResponse {
    pub monthly_patient_volume: u32,
    pub conversion_rate_percent: u8,
    pub cost_savings_percent: u8,
}

impl From<RoiInputs> for RoiInputsResponse {
    fn from(inputs: RoiInputs) -> Self {
        Self {
            monthly_patient_volume: inputs.monthly_patient_volume(),
            conversion_rate_percent: inputs.conversion_rate().value(),
            cost_savings_percent: inputs.cost_savings().value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimateResponse {
    pub inputs: RoiInputsResponse,
    pub monthly_patients_using_ai: i64,
    pub savings_per_patient: i64,
    pub annual_savings: i64,
    pub roi_percentage: i64,
    /// `null` when there are no monthly savings.
    pub payback_months: Option<f64>,
    pub payback_applicable: bool,
    /// Human-readable payback, e.g. `1.7 months`.
    pub payback_display: String,
}

impl From<EstimateRoiResult> for RoiEstimateResponse {
    fn from(result: EstimateRoiResult) -> Self {
        let projection = result.projection;
        Self {
            inputs: result.inputs.into(),
            monthly_patients_using_ai: projection.monthly_patients_using_ai,
            savings_per_patient: projection.savings_per_patient,
            annual_savings: projection.annual_savings,
            roi_percentage: projection.roi_percentage,
            payback_months: projection.payback_period.months(),
            payback_applicable: projection.payback_period.is_applicable(),
            payback_display: projection.payback_period.to_string(),
        }
    }
}

/// Bounds and starting point of one slider.
#[derive(Debug, Clone, Serialize)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderRanges {
    pub monthly_patient_volume: SliderRange,
    pub conversion_rate_percent: SliderRange,
    pub cost_savings_percent: SliderRange,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiAssumptionsResponse {
    pub cost_per_interaction: f64,
    pub implementation_cost: f64,
    pub ranges: SliderRanges,
}

impl From<RoiAssumptions> for RoiAssumptionsResponse {
    fn from(assumptions: RoiAssumptions) -> Self {
        let defaults = RoiInputs::default();
        Self {
            cost_per_interaction: assumptions.cost_per_interaction,
            implementation_cost: assumptions.implementation_cost,
            ranges: SliderRanges {
                monthly_patient_volume: SliderRange {
                    min: *PATIENT_VOLUME_RANGE.start(),
                    max: *PATIENT_VOLUME_RANGE.end(),
                    default: defaults.monthly_patient_volume(),
                },
                conversion_rate_percent: SliderRange {
                    min: u32::from(*CONVERSION_RATE_RANGE.start()),
                    max: u32::from(*CONVERSION_RATE_RANGE.end()),
                    default: u32::from(defaults.conversion_rate().value()),
                },
                cost_savings_percent: SliderRange {
                    min: u32::from(*COST_SAVINGS_RANGE.start()),
                    max: u32::from(*COST_SAVINGS_RANGE.end()),
                    default: u32::from(defaults.cost_savings().value()),
                },
            },
        }
    }
}

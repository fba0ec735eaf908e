//! Slider inputs for the ROI estimator.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::domain::foundation::{Percentage, ValidationError};

/// Accepted monthly patient volume.
pub const PATIENT_VOLUME_RANGE: RangeInclusive<u32> = 100..=10_000;

/// Accepted share of patients engaging with the AI tooling.
pub const CONVERSION_RATE_RANGE: RangeInclusive<u8> = 5..=95;

/// Accepted cost reduction per converted interaction.
pub const COST_SAVINGS_RANGE: RangeInclusive<u8> = 10..=90;

/// Validated inputs to an ROI estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    monthly_patient_volume: u32,
    conversion_rate: Percentage,
    cost_savings: Percentage,
}

impl RoiInputs {
    /// Creates inputs, rejecting any value outside its slider range.
    pub fn try_new(
        monthly_patient_volume: i64,
        conversion_rate_percent: i64,
        cost_savings_percent: i64,
    ) -> Result<Self, ValidationError> {
        let volume = check_range(
            "monthlyPatientVolume",
            monthly_patient_volume,
            *PATIENT_VOLUME_RANGE.start() as i64,
            *PATIENT_VOLUME_RANGE.end() as i64,
        )?;
        let conversion = check_range(
            "conversionRatePercent",
            conversion_rate_percent,
            *CONVERSION_RATE_RANGE.start() as i64,
            *CONVERSION_RATE_RANGE.end() as i64,
        )?;
        let savings = check_range(
            "costSavingsPercent",
            cost_savings_percent,
            *COST_SAVINGS_RANGE.start() as i64,
            *COST_SAVINGS_RANGE.end() as i64,
        )?;

        Ok(Self {
            monthly_patient_volume: volume as u32,
            conversion_rate: Percentage::new(conversion as u8),
            cost_savings: Percentage::new(savings as u8),
        })
    }

    /// Creates inputs, clamping each value into its slider range.
    pub fn clamped(
        monthly_patient_volume: i64,
        conversion_rate_percent: i64,
        cost_savings_percent: i64,
    ) -> Self {
        let volume = monthly_patient_volume.clamp(
            *PATIENT_VOLUME_RANGE.start() as i64,
            *PATIENT_VOLUME_RANGE.end() as i64,
        );
        let conversion = conversion_rate_percent.clamp(
            *CONVERSION_RATE_RANGE.start() as i64,
            *CONVERSION_RATE_RANGE.end() as i64,
        );
        let savings = cost_savings_percent.clamp(
            *COST_SAVINGS_RANGE.start() as i64,
            *COST_SAVINGS_RANGE.end() as i64,
        );

        Self {
            monthly_patient_volume: volume as u32,
            conversion_rate: Percentage::new(conversion as u8),
            cost_savings: Percentage::new(savings as u8),
        }
    }

    pub fn monthly_patient_volume(&self) -> u32 {
        self.monthly_patient_volume
    }

    pub fn conversion_rate(&self) -> Percentage {
        self.conversion_rate
    }

    pub fn cost_savings(&self) -> Percentage {
        self.cost_savings
    }
}

impl Default for RoiInputs {
    /// The calculator's initial slider positions.
    fn default() -> Self {
        Self {
            monthly_patient_volume: 1_000,
            conversion_rate: Percentage::new(25),
            cost_savings: Percentage::new(40),
        }
    }
}

fn check_range(field: &str, value: i64, min: i64, max: i64) -> Result<i64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(value)
}

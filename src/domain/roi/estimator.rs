//! ROI Estimator - projected savings from AI-assisted patient interactions.
//!
//! The estimate is a straight-line computation:
//!
//! ```text
//! converted        = volume * conversion% / 100
//! per_patient      = savings% / 100 * cost_per_interaction
//! monthly_savings  = converted * per_patient
//! annual_savings   = round(monthly_savings * 12)
//! roi_percentage   = round((annual - implementation_cost) / implementation_cost * 100)
//! payback_months   = round(implementation_cost / monthly_savings * 10) / 10
//! ```
//!
//! A zero monthly saving yields [`PaybackPeriod::NotApplicable`].

use serde::Serialize;

use super::inputs::RoiInputs;
use super::projection::{PaybackPeriod, RoiProjection};
use crate::domain::foundation::Percentage;

/// Average cost of one patient interaction, in currency units.
pub const COST_PER_INTERACTION: f64 = 150.0;

/// One-off cost of rolling out the AI tooling, in currency units.
pub const IMPLEMENTATION_COST: f64 = 25_000.0;

/// Fixed figures the estimate is based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiAssumptions {
    pub cost_per_interaction: f64,
    pub implementation_cost: f64,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            cost_per_interaction: COST_PER_INTERACTION,
            implementation_cost: IMPLEMENTATION_COST,
        }
    }
}

/// Stateless calculator; every call recomputes from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiEstimator {
    assumptions: RoiAssumptions,
}

impl RoiEstimator {
    pub fn new(assumptions: RoiAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &RoiAssumptions {
        &self.assumptions
    }

    /// Estimates for range-checked slider inputs.
    pub fn estimate(&self, inputs: &RoiInputs) -> RoiProjection {
        self.compute_raw(
            inputs.monthly_patient_volume(),
            inputs.conversion_rate(),
            inputs.cost_savings(),
        )
    }

    /// Estimates without slider range checks. Zero rates are allowed.
    pub fn compute_raw(
        &self,
        monthly_patient_volume: u32,
        conversion_rate: Percentage,
        cost_savings: Percentage,
    ) -> RoiProjection {
        let RoiAssumptions {
            cost_per_interaction,
            implementation_cost,
        } = self.assumptions;

        let converted_patients =
            f64::from(monthly_patient_volume) * f64::from(conversion_rate.value()) / 100.0;
        let savings_per_patient = cost_savings.as_fraction() * cost_per_interaction;
        let monthly_savings = converted_patients * savings_per_patient;
        let annual_savings = monthly_savings * 12.0;
        let roi = (annual_savings - implementation_cost) / implementation_cost * 100.0;

        let payback_period = if monthly_savings > 0.0 {
            let months = implementation_cost / monthly_savings;
            PaybackPeriod::Months(round_half_up(months * 10.0) / 10.0)
        } else {
            PaybackPeriod::NotApplicable
        };

        RoiProjection {
            monthly_patients_using_ai: round_half_up(converted_patients) as i64,
            savings_per_patient: round_half_up(savings_per_patient) as i64,
            annual_savings: round_half_up(annual_savings) as i64,
            roi_percentage: round_half_up(roi) as i64,
            payback_period,
        }
    }
}

/// Estimates with the default assumptions.
pub fn compute(
    monthly_patient_volume: u32,
    conversion_rate_percent: u8,
    cost_savings_percent: u8,
) -> RoiProjection {
    RoiEstimator::default().compute_raw(
        monthly_patient_volume,
        Percentage::new(conversion_rate_percent),
        Percentage::new(cost_savings_percent),
    )
}

/// Rounds halves toward positive infinity, so -12.5 becomes -12.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_inputs_produce_expected_projection() {
        let projection = compute(1_000, 25, 40);

        assert_eq!(projection.monthly_patients_using_ai, 250);
        assert_eq!(projection.savings_per_patient, 60);
        assert_eq!(projection.annual_savings, 180_000);
        assert_eq!(projection.roi_percentage, 620);
        assert_eq!(projection.payback_period, PaybackPeriod::Months(1.7));
    }

    #[test]
    fn estimate_matches_compute_for_default_inputs() {
        let estimator = RoiEstimator::default();
        assert_eq!(
            estimator.estimate(&RoiInputs::default()),
            compute(1_000, 25, 40)
        );
    }

    #[test]
    fn minimum_inputs_give_negative_roi() {
        // 100 * 5% = 5 patients, 15 saved each, 75/month, 900/year
        let projection = compute(100, 5, 10);

        assert_eq!(projection.annual_savings, 900);
        assert_eq!(projection.roi_percentage, -96);
        assert_eq!(projection.payback_period, PaybackPeriod::Months(333.3));
    }

    #[test]
    fn maximum_inputs() {
        // 10000 * 95% = 9500 patients, 135 saved each
        let projection = compute(10_000, 95, 90);

        assert_eq!(projection.annual_savings, 15_390_000);
        assert_eq!(projection.roi_percentage, 61_460);
        assert_eq!(projection.payback_period, PaybackPeriod::Months(0.0));
    }

    #[test]
    fn zero_conversion_rate_has_no_payback() {
        let projection = compute(1_000, 0, 40);

        assert_eq!(projection.annual_savings, 0);
        assert_eq!(projection.roi_percentage, -100);
        assert_eq!(projection.payback_period, PaybackPeriod::NotApplicable);
    }

    #[test]
    fn zero_cost_savings_has_no_payback() {
        let projection = compute(1_000, 25, 0);
        assert_eq!(projection.payback_period, PaybackPeriod::NotApplicable);
    }

    #[test]
    fn custom_assumptions_are_used() {
        let estimator = RoiEstimator::new(RoiAssumptions {
            cost_per_interaction: 100.0,
            implementation_cost: 10_000.0,
        });
        let projection = estimator.estimate(&RoiInputs::default());

        // 250 patients * 40 = 10000/month
        assert_eq!(projection.annual_savings, 120_000);
        assert_eq!(projection.roi_percentage, 1_100);
        assert_eq!(projection.payback_period, PaybackPeriod::Months(1.0));
    }

    #[test]
    fn round_half_up_rounds_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-12.5), -12.0);
        assert_eq!(round_half_up(-12.6), -13.0);
        assert_eq!(round_half_up(16.666), 17.0);
    }

    proptest! {
        #[test]
        fn in_range_inputs_give_finite_results(
            volume in 100i64..=10_000,
            conversion in 5i64..=95,
            savings in 10i64..=90,
        ) {
            let inputs = RoiInputs::try_new(volume, conversion, savings).unwrap();
            let projection = RoiEstimator::default().estimate(&inputs);

            prop_assert!(projection.annual_savings > 0);
            prop_assert!(projection.roi_percentage >= -100);
            let months = projection.payback_period.months();
            prop_assert!(months.map(f64::is_finite).unwrap_or(false));
        }

        #[test]
        fn estimate_is_idempotent(
            volume in 100i64..=10_000,
            conversion in 5i64..=95,
            savings in 10i64..=90,
        ) {
            let inputs = RoiInputs::try_new(volume, conversion, savings).unwrap();
            let estimator = RoiEstimator::default();
            prop_assert_eq!(estimator.estimate(&inputs), estimator.estimate(&inputs));
        }

        #[test]
        fn more_volume_never_lowers_savings(
            volume in 100u32..=9_900,
            conversion in 5u8..=95,
            savings in 10u8..=90,
        ) {
            let lower = compute(volume, conversion, savings);
            let higher = compute(volume + 100, conversion, savings);
            prop_assert!(higher.annual_savings >= lower.annual_savings);
        }
    }
}

//! Output of an ROI estimate.

use serde::Serialize;
use std::fmt;

/// Months until cumulative savings cover the implementation cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "months")]
pub enum PaybackPeriod {
    /// Rounded to one fractional digit.
    Months(f64),
    /// No savings are projected, so the cost is never recovered.
    NotApplicable,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Months(m) => Some(*m),
            PaybackPeriod::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, PaybackPeriod::Months(_))
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Months(m) => write!(f, "{} months", m),
            PaybackPeriod::NotApplicable => f.write_str("not applicable"),
        }
    }
}

/// Derived financial metrics for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    /// Converted patients per month, rounded.
    pub monthly_patients_using_ai: i64,
    /// Savings per converted patient in currency units, rounded.
    pub savings_per_patient: i64,
    pub annual_savings: i64,
    /// Signed; negative when annual savings fall short of the implementation cost.
    pub roi_percentage: i64,
    pub payback_period: PaybackPeriod,
}

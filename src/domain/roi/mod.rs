//! ROI module - return-on-investment projections for a practice.
//!
//! Pure computation: no I/O, no state between calls.

mod errors;
mod estimator;
mod inputs;
mod projection;

pub use errors::RoiError;
pub use estimator::{compute, RoiAssumptions, RoiEstimator, COST_PER_INTERACTION, IMPLEMENTATION_COST};
pub use inputs::{RoiInputs, CONVERSION_RATE_RANGE, COST_SAVINGS_RANGE, PATIENT_VOLUME_RANGE};
pub use projection::{PaybackPeriod, RoiProjection};

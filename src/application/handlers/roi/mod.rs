//! ROI query handlers.

mod estimate_roi;

pub use estimate_roi::{EstimateRoiHandler, EstimateRoiQuery, EstimateRoiResult};

//! HTTP adapter for the ROI calculator.

mod dto;
mod handlers;
mod routes;

pub use dto::{EstimateRoiRequest, RoiAssumptionsResponse, RoiEstimateResponse};
pub use handlers::RoiHandlers;
pub use routes::roi_routes;

//! HTTP handlers for ROI endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::roi::{EstimateRoiHandler, EstimateRoiQuery};
use crate::domain::foundation::ValidationError;
use crate::domain::roi::RoiError;

use super::dto::{EstimateRoiRequest, RoiAssumptionsResponse, RoiEstimateResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RoiHandlers {
    estimate_handler: Arc<EstimateRoiHandler>,
}

impl RoiHandlers {
    pub fn new(estimate_handler: Arc<EstimateRoiHandler>) -> Self {
        Self { estimate_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/roi/estimate - Project savings for slider positions
pub async fn estimate_roi(
    State(handlers): State<RoiHandlers>,
    Json(req): Json<EstimateRoiRequest>,
) -> Response {
    let query = EstimateRoiQuery {
        monthly_patient_volume: req.monthly_patient_volume,
        conversion_rate_percent: req.conversion_rate_percent,
        cost_savings_percent: req.cost_savings_percent,
    };

    match handlers.estimate_handler.handle(query) {
        Ok(result) => (StatusCode::OK, Json(RoiEstimateResponse::from(result))).into_response(),
        Err(e) => handle_roi_error(e),
    }
}

/// GET /api/roi/assumptions - Constants and slider ranges
pub async fn get_assumptions(State(handlers): State<RoiHandlers>) -> Response {
    let response = RoiAssumptionsResponse::from(handlers.estimate_handler.assumptions());
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_roi_error(error: RoiError) -> Response {
    let body = ErrorResponse::new(error.code(), error.message());
    let body = match &error {
        RoiError::InvalidInput(ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        }) => body.with_details(json!({
            "field": field,
            "min": min,
            "max": max,
            "actual": actual,
        })),
        RoiError::InvalidInput(err) => body.with_details(json!({ "field": err.field() })),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_maps_to_400() {
        let error = RoiError::from(ValidationError::out_of_range("monthlyPatientVolume", 100, 10_000, 5));
        let response = handle_roi_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! HTTP routes for ROI endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{estimate_roi, get_assumptions, RoiHandlers};

/// Creates the ROI router. Paths are relative to `/api/roi`.
pub fn roi_routes(handlers: RoiHandlers) -> Router {
    Router::new()
        .route("/estimate", post(estimate_roi))
        .route("/assumptions", get(get_assumptions))
        .with_state(handlers)
}

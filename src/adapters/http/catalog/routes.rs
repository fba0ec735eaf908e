//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_industry, get_service, list_case_studies, list_industries, list_services,
    CatalogHandlers,
};

/// Creates the catalog router. Paths are relative to `/api`.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/services", get(list_services))
        .route("/services/:slug", get(get_service))
        .route("/industries", get(list_industries))
        .route("/industries/:slug", get(get_industry))
        .route("/case-studies", get(list_case_studies))
        .with_state(handlers)
}

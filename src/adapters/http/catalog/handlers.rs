//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::catalog::{
    GetIndustryHandler, GetIndustryQuery, GetServiceHandler, GetServiceQuery,
    ListCaseStudiesHandler, ListIndustriesHandler, ListServicesHandler,
};
use crate::domain::catalog::CatalogError;

use super::dto::{CaseStudyResponse, IndustryResponse, ServiceResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CatalogHandlers {
    list_services: Arc<ListServicesHandler>,
    get_service: Arc<GetServiceHandler>,
    list_industries: Arc<ListIndustriesHandler>,
    get_industry: Arc<GetIndustryHandler>,
    list_case_studies: Arc<ListCaseStudiesHandler>,
}

impl CatalogHandlers {
    pub fn new(
        list_services: Arc<ListServicesHandler>,
        get_service: Arc<GetServiceHandler>,
        list_industries: Arc<ListIndustriesHandler>,
        get_industry: Arc<GetIndustryHandler>,
        list_case_studies: Arc<ListCaseStudiesHandler>,
    ) -> Self {
        Self {
            list_services,
            get_service,
            list_industries,
            get_industry,
            list_case_studies,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/services - List offered services
pub async fn list_services(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.list_services.handle().await {
        Ok(services) => {
            let response: Vec<ServiceResponse> = services.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/services/:slug - Service detail
pub async fn get_service(
    State(handlers): State<CatalogHandlers>,
    Path(slug): Path<String>,
) -> Response {
    match handlers.get_service.handle(GetServiceQuery { slug }).await {
        Ok(service) => (StatusCode::OK, Json(ServiceResponse::from(service))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/industries - List industries served
pub async fn list_industries(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.list_industries.handle().await {
        Ok(industries) => {
            let response: Vec<IndustryResponse> =
                industries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/industries/:slug - Industry detail
pub async fn get_industry(
    State(handlers): State<CatalogHandlers>,
    Path(slug): Path<String>,
) -> Response {
    match handlers.get_industry.handle(GetIndustryQuery { slug }).await {
        Ok(industry) => (StatusCode::OK, Json(IndustryResponse::from(industry))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/case-studies - List case studies
pub async fn list_case_studies(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.list_case_studies.handle().await {
        Ok(studies) => {
            let response: Vec<CaseStudyResponse> = studies.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_catalog_error(error: CatalogError) -> Response {
    match error {
        CatalogError::NotFound { kind, key } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(kind, &key)),
        )
            .into_response(),
        CatalogError::Infrastructure(msg) => {
            tracing::error!("Catalog storage failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Catalog is temporarily unavailable")),
            )
                .into_response()
        }
    }
}

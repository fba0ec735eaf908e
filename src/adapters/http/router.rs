//! Top-level API router.
//!
//! Wires every module's routes under `/api` and applies the cross-cutting
//! layers: request ids, tracing, a request timeout and CORS.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::handlers::{
    DeleteSubmissionHandler, EstimateRoiHandler, GetIndustryHandler, GetServiceHandler,
    GetSubmissionHandler, ListCaseStudiesHandler, ListIndustriesHandler, ListServicesHandler,
    ListSubmissionsHandler, SendChatMessageHandler, SubmitContactHandler,
    UpdateSubmissionStatusHandler,
};
use crate::config::ServerConfig;
use crate::ports::{
    CaseStudyRepository, ContactSubmissionRepository, IndustryRepository, ServiceRepository,
};

use super::catalog::{catalog_routes, CatalogHandlers};
use super::chat::{chat_routes, ChatHandlers};
use super::contact::{contact_routes, ContactHandlers};
use super::health::health;
use super::roi::{roi_routes, RoiHandlers};

/// Handler state for every API module.
#[derive(Clone)]
pub struct ApiHandlers {
    pub catalog: CatalogHandlers,
    pub contact: ContactHandlers,
    pub roi: RoiHandlers,
    pub chat: ChatHandlers,
}

impl ApiHandlers {
    /// Builds all handlers over the given repositories. The ROI estimator
    /// and chat assistant are stateless and use their default tables.
    pub fn from_repositories(
        services: Arc<dyn ServiceRepository>,
        industries: Arc<dyn IndustryRepository>,
        case_studies: Arc<dyn CaseStudyRepository>,
        contacts: Arc<dyn ContactSubmissionRepository>,
    ) -> Self {
        let catalog = CatalogHandlers::new(
            Arc::new(ListServicesHandler::new(services.clone())),
            Arc::new(GetServiceHandler::new(services)),
            Arc::new(ListIndustriesHandler::new(industries.clone())),
            Arc::new(GetIndustryHandler::new(industries)),
            Arc::new(ListCaseStudiesHandler::new(case_studies)),
        );

        let contact = ContactHandlers::new(
            Arc::new(SubmitContactHandler::new(contacts.clone())),
            Arc::new(ListSubmissionsHandler::new(contacts.clone())),
            Arc::new(GetSubmissionHandler::new(contacts.clone())),
            Arc::new(UpdateSubmissionStatusHandler::new(contacts.clone())),
            Arc::new(DeleteSubmissionHandler::new(contacts)),
        );

        Self {
            catalog,
            contact,
            roi: RoiHandlers::new(Arc::new(EstimateRoiHandler::default())),
            chat: ChatHandlers::new(Arc::new(SendChatMessageHandler::default())),
        }
    }
}

/// Creates the application router.
///
/// ```text
/// GET    /health
/// GET    /api/services            GET /api/services/:slug
/// GET    /api/industries          GET /api/industries/:slug
/// GET    /api/case-studies
/// POST   /api/contact             GET /api/contact/submissions
/// GET    /api/contact/submissions/:id   (also PATCH, DELETE)
/// POST   /api/roi/estimate        GET /api/roi/assumptions
/// GET    /api/chat/greeting       POST /api/chat/messages
/// ```
pub fn api_router(handlers: ApiHandlers, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(catalog_routes(handlers.catalog))
        .nest("/contact", contact_routes(handlers.contact))
        .nest("/roi", roi_routes(handlers.roi))
        .nest("/chat", chat_routes(handlers.chat));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        CatalogSeed, InMemoryCaseStudyRepository, InMemoryContactSubmissionRepository,
        InMemoryIndustryRepository, InMemoryServiceRepository,
    };
    use crate::config::Environment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router(server: &ServerConfig) -> Router {
        let seed = CatalogSeed::bundled().expect("bundled catalog parses");
        let handlers = ApiHandlers::from_repositories(
            Arc::new(InMemoryServiceRepository::with_services(seed.services)),
            Arc::new(InMemoryIndustryRepository::with_industries(seed.industries)),
            Arc::new(InMemoryCaseStudyRepository::with_case_studies(
                seed.case_studies,
            )),
            Arc::new(InMemoryContactSubmissionRepository::new()),
        );
        api_router(handlers, server)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok_and_version() {
        let app = test_router(&ServerConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let app = test_router(&ServerConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_kept() {
        let app = test_router(&ServerConfig::default());

        let response = app
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
            Some("abc-123")
        );
    }

    #[tokio::test]
    async fn catalog_is_mounted_under_api() {
        let app = test_router(&ServerConfig::default());

        let response = app
            .oneshot(Request::get("/api/services").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn roi_chat_and_contact_are_nested() {
        let server = ServerConfig::default();

        let roi = test_router(&server)
            .oneshot(
                Request::get("/api/roi/assumptions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(roi.status(), StatusCode::OK);

        let chat = test_router(&server)
            .oneshot(Request::get("/api/chat/greeting").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(chat.status(), StatusCode::OK);

        let contact = test_router(&server)
            .oneshot(
                Request::get("/api/contact/submissions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(contact.status(), StatusCode::OK);
        assert_eq!(body_json(contact).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let app = test_router(&ServerConfig::default());

        let response = app
            .oneshot(Request::get("/api/nothing-here").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed_on_preflight() {
        let server = ServerConfig {
            environment: Environment::Production,
            cors_origins: Some("https://strictlyheal.example".to_string()),
            ..ServerConfig::default()
        };
        let app = test_router(&server);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/contact")
                    .header(header::ORIGIN, "https://strictlyheal.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://strictlyheal.example")
        );
    }

    #[tokio::test]
    async fn unlisted_origin_is_not_allowed() {
        let server = ServerConfig {
            environment: Environment::Production,
            cors_origins: Some("https://strictlyheal.example".to_string()),
            ..ServerConfig::default()
        };
        let app = test_router(&server);

        let response = app
            .oneshot(
                Request::get("/api/services")
                    .header(header::ORIGIN, "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

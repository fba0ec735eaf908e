//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_greeting, send_message, ChatHandlers};

/// Creates the chat router. Paths are relative to `/api/chat`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/greeting", get(get_greeting))
        .route("/messages", post(send_message))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::chat::SendChatMessageHandler;
    use crate::domain::chat::{ChatIntent, MAX_MESSAGE_CHARS};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        chat_routes(ChatHandlers::new(Arc::new(SendChatMessageHandler::default())))
    }

    async fn send(message: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "message": message }).to_string();
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/messages")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn demo_request_gets_demo_reply() {
        let (status, body) = send("Can you show me how it works?").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "demo");
        assert_eq!(body["message"], ChatIntent::Demo.response());
        assert_eq!(body["role"], "assistant");
    }

    #[tokio::test]
    async fn blank_message_is_400() {
        let (status, body) = send("  ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn oversized_message_is_400() {
        let (status, _) = send(&"a".repeat(MAX_MESSAGE_CHARS + 1)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn greeting_has_no_intent() {
        let response = router()
            .oneshot(Request::builder().uri("/greeting").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body.get("intent").is_none());
        assert!(body["message"].as_str().unwrap().starts_with("Hi!"));
    }
}

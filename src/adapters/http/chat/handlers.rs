//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::chat::{SendChatMessageCommand, SendChatMessageHandler};
use crate::domain::chat::ChatError;
use crate::domain::foundation::ErrorCode;

use super::dto::{ChatMessageResponse, SendMessageRequest};

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(send_handler: Arc<SendChatMessageHandler>) -> Self {
        Self { send_handler }
    }
}

/// GET /api/chat/greeting - Opening message
pub async fn get_greeting(State(handlers): State<ChatHandlers>) -> Response {
    let response = ChatMessageResponse::greeting(handlers.send_handler.greeting());
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/chat/messages - Scripted reply to a visitor message
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let cmd = SendChatMessageCommand {
        message: req.message,
    };

    match handlers.send_handler.handle(cmd) {
        Ok(reply) => (StatusCode::OK, Json(ChatMessageResponse::from(reply))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

fn handle_chat_error(error: ChatError) -> Response {
    let code = match error {
        ChatError::EmptyMessage => ErrorCode::ValidationFailed,
        ChatError::MessageTooLong { .. } => ErrorCode::OutOfRange,
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(code, error.to_string())),
    )
        .into_response()
}

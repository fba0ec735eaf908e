//! Request and response DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatIntent, ChatReply};

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub role: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<ChatIntent>,
}

impl ChatMessageResponse {
    /// The widget's opening line.
    pub fn greeting(message: &str) -> Self {
        Self {
            role: "assistant",
            message: message.to_string(),
            intent: None,
        }
    }
}

impl From<ChatReply> for ChatMessageResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            role: "assistant",
            message: reply.message.to_string(),
            intent: Some(reply.intent),
        }
    }
}

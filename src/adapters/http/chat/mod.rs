//! HTTP adapter for the chat widget.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageResponse, SendMessageRequest};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;

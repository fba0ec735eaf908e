//! SendChatMessageHandler - Command handler for the chat widget.

use tracing::debug;

use crate::domain::chat::{ChatAssistant, ChatError, ChatReply};

/// Command carrying one visitor message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub message: String,
}

/// Handler that answers chat messages with scripted replies.
#[derive(Clone, Default)]
pub struct SendChatMessageHandler {
    assistant: ChatAssistant,
}

impl SendChatMessageHandler {
    pub fn new(assistant: ChatAssistant) -> Self {
        Self { assistant }
    }

    pub fn greeting(&self) -> &'static str {
        self.assistant.greeting()
    }

    pub fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, ChatError> {
        let reply = self.assistant.reply(&cmd.message)?;
        debug!(intent = ?reply.intent, "Chat message classified");
        Ok(reply)
    }
}

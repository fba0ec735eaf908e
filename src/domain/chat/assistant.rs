//! Scripted assistant: classify, then answer from the script.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use super::classifier::{IntentClassifier, KeywordIntentClassifier};
use super::intent::{ChatIntent, GREETING};

/// Longest message accepted, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message exceeds {max} characters")]
    MessageTooLong { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub intent: ChatIntent,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct ChatAssistant {
    classifier: Arc<dyn IntentClassifier>,
}

impl ChatAssistant {
    pub fn new(classifier: Arc<dyn IntentClassifier>) -> Self {
        Self { classifier }
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    pub fn reply(&self, message: &str) -> Result<ChatReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ChatError::MessageTooLong {
                max: MAX_MESSAGE_CHARS,
            });
        }

        let intent = self.classifier.classify(message);
        Ok(ChatReply {
            intent,
            message: intent.response(),
        })
    }
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self::new(Arc::new(KeywordIntentClassifier::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysDemo;

    impl IntentClassifier for AlwaysDemo {
        fn classify(&self, _message: &str) -> ChatIntent {
            ChatIntent::Demo
        }
    }

    #[test]
    fn replies_with_scripted_response() {
        let reply = ChatAssistant::default().reply("How much does it cost?").unwrap();
        assert_eq!(reply.intent, ChatIntent::Pricing);
        assert!(reply.message.starts_with("Our pricing starts at $299/month"));
    }

    #[test]
    fn blank_message_is_rejected() {
        assert_eq!(
            ChatAssistant::default().reply("   "),
            Err(ChatError::EmptyMessage)
        );
    }

    #[test]
    fn oversized_message_is_rejected() {
        let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(matches!(
            ChatAssistant::default().reply(&long),
            Err(ChatError::MessageTooLong { .. })
        ));
    }

    #[test]
    fn classifier_is_injectable() {
        let assistant = ChatAssistant::new(Arc::new(AlwaysDemo));
        let reply = assistant.reply("anything").unwrap();
        assert_eq!(reply.intent, ChatIntent::Demo);
        assert_eq!(reply.message, ChatIntent::Demo.response());
    }

    #[test]
    fn greeting_is_the_opening_line() {
        assert!(ChatAssistant::default().greeting().starts_with("Hi! I'm your AI assistant."));
    }
}

//! Chat module - the site's scripted assistant.
//!
//! Classification is a strategy ([`IntentClassifier`]); answering is a
//! fixed lookup from [`ChatIntent`] to a canned response.

mod assistant;
mod classifier;
mod intent;

pub use assistant::{ChatAssistant, ChatError, ChatReply, MAX_MESSAGE_CHARS};
pub use classifier::{IntentClassifier, KeywordIntentClassifier};
pub use intent::{ChatIntent, GREETING};

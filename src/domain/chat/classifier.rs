//! Intent classification strategies.

use super::intent::ChatIntent;

/// Maps a visitor message to an intent.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, message: &str) -> ChatIntent;
}

/// Case-insensitive substring rules, checked in order; first match wins.
#[derive(Debug, Clone)]
pub struct KeywordIntentClassifier {
    rules: Vec<(ChatIntent, Vec<String>)>,
}

impl KeywordIntentClassifier {
    /// Builds a classifier from custom rules. Keywords are matched lowercase.
    pub fn with_rules(rules: Vec<(ChatIntent, Vec<String>)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(intent, keywords)| {
                (
                    intent,
                    keywords.into_iter().map(|k| k.to_lowercase()).collect(),
                )
            })
            .collect();
        Self { rules }
    }
}

impl Default for KeywordIntentClassifier {
    fn default() -> Self {
        let rule = |intent, words: &[&str]| (intent, words.iter().map(|w| w.to_string()).collect());
        Self::with_rules(vec![
            rule(ChatIntent::Pricing, &["price", "cost"]),
            rule(ChatIntent::Features, &["feature", "what can"]),
            rule(ChatIntent::Demo, &["demo", "show me"]),
            rule(ChatIntent::Roi, &["roi", "return"]),
            rule(ChatIntent::Integration, &["integrate", "connect"]),
        ])
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, message: &str) -> ChatIntent {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|(intent, _)| *intent)
            .unwrap_or(ChatIntent::General)
    }
}

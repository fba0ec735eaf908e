//! What a visitor is asking about, and the scripted answer for each topic.

use serde::{Deserialize, Serialize};

/// Opening line of the chat widget.
pub const GREETING: &str = "Hi! I'm your AI assistant. I can help you learn about our conversational AI solutions for wellness practices. What would you like to know?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatIntent {
    Pricing,
    Features,
    Demo,
    Roi,
    Integration,
    General,
}

impl ChatIntent {
    /// Canned reply for this intent.
    pub fn response(&self) -> &'static str {
        match self {
            ChatIntent::Pricing => "Our pricing starts at $299/month for basic AI assistant features. This includes 24/7 patient support, appointment scheduling, and basic FAQ handling. Would you like to see a detailed pricing breakdown?",
            ChatIntent::Features => "Our AI assistants can handle appointment scheduling, answer common patient questions, collect intake forms, send appointment reminders, and even help with basic health education. Which feature interests you most?",
            ChatIntent::Demo => "I'd love to show you a demo! Our AI can integrate with your existing practice management system and start engaging patients within 48 hours. Shall I connect you with our demo specialist?",
            ChatIntent::Roi => "Most practices see a 40% reduction in front desk calls and 25% increase in appointment bookings within the first month. Our ROI calculator shows practices typically pay for themselves within 60 days.",
            ChatIntent::Integration => "We integrate with most major practice management systems including SimplePractice, TherapyNotes, MINDBODY, and more. Setup typically takes less than 2 hours with our technical team.",
            ChatIntent::General => "That's a great question! Our AI solutions are specifically designed for wellness practices. Would you like to schedule a 15-minute demo to see how we can help grow your practice?",
        }
    }
}

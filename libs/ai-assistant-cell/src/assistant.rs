use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use shared_models::AppResult;
use shared_utils::form::require;

use crate::models::ChatMessage;

pub const GREETING: &str =
    "Hello! I'm your AI Doctor Assistant. Describe your symptoms or ask a health question and I'll do my best to help.";

pub const CANNED_REPLIES: &[&str] = &[
    "Based on what you've described, I'd recommend monitoring your symptoms for the next 24-48 hours. If they worsen, please consult a healthcare professional.",
    "That sounds uncomfortable. Make sure you're staying hydrated and getting enough rest. Would you like some general wellness tips?",
    "I understand your concern. While I can offer general information, a doctor can give you a proper diagnosis. Consider scheduling an appointment.",
    "Many people experience similar symptoms. Keeping a symptom diary can help your doctor identify patterns.",
    "It's a good idea to track this in your health log. If it persists beyond a week, please see a healthcare provider.",
    "Lifestyle factors such as sleep, diet and stress often play a role. Small consistent changes can make a big difference.",
];

/// Locally simulated assistant. Replies are picked uniformly at random from
/// [`CANNED_REPLIES`]; nothing leaves the process.
pub struct AssistantController<R = StdRng> {
    rng: R,
    messages: Vec<ChatMessage>,
    pub draft: String,
}

impl AssistantController<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for AssistantController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AssistantController<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            messages: vec![ChatMessage::assistant(GREETING)],
            draft: String::new(),
        }
    }

    /// Appends the drafted message and a canned reply. A blank draft is
    /// rejected and nothing is appended.
    pub fn send(&mut self) -> AppResult<&ChatMessage> {
        let text = require(&self.draft, "Message")?;
        self.messages.push(ChatMessage::user(text));
        self.draft.clear();

        let reply = CANNED_REPLIES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(GREETING);
        debug!("Assistant replying with canned response");
        self.messages.push(ChatMessage::assistant(reply));

        Ok(&self.messages[self.messages.len() - 1])
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

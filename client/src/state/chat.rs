#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use session::{ChatSession, DisplayTime, PendingRequest};
use session::wire::{ChatError, ChatResponse, DEFAULT_CHAT_ENDPOINT};

/// State for the chat panel.
///
/// Wraps the session state machine together with the endpoint requests are
/// posted to. The selection context inside `session` is read once per
/// submission, so changing floats never affects a request already sent.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub session: ChatSession,
    pub endpoint: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { session: ChatSession::new(), endpoint: DEFAULT_CHAT_ENDPOINT.to_owned() }
    }
}

impl ChatState {
    /// Record the input and return the request to send, if any.
    pub fn submit(&mut self, text: &str, now: Option<DisplayTime>) -> Option<PendingRequest> {
        self.session.submit(text, now)
    }

    /// Fold a chat-service outcome back into the transcript.
    pub fn resolve(&mut self, pending: &PendingRequest, outcome: Result<ChatResponse, ChatError>, now: Option<DisplayTime>) {
        self.session.resolve(pending.placeholder, outcome, now);
    }

    /// Whether the transcript has anything to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.transcript().is_empty()
    }
}

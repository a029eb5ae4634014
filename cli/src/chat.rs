//! Chat-service client for the terminal.
//!
//! Drives the same `ChatSession` state machine as the browser, but awaits
//! each exchange before reading the next line.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use session::wire::{ChatError, ChatRequest, ChatResponse, check_status, decode_response};
use session::{ChatMessage, ChatSession, Content, MessageId, Role};

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `POST` one question.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError`] on transport failure, a non-success status or an
    /// undecodable body.
    pub async fn send(&self, body: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        check_status(resp.status().as_u16())?;
        let text = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        decode_response(&text)
    }

    /// Submit `text` through `session` and wait for the reply.
    ///
    /// Returns the id of the bot message, or `None` for blank input. Service
    /// failures are already folded into the transcript as the apology.
    pub async fn exchange(&self, session: &mut ChatSession, text: &str) -> Option<MessageId> {
        let pending = session.submit(text, None)?;
        tracing::debug!(endpoint = %self.endpoint, selected_float = ?pending.body.selected_float, "sending question");
        let outcome = self.send(&pending.body).await;
        session.resolve(pending.placeholder, outcome, None);
        Some(pending.placeholder)
    }
}

/// One transcript line for the terminal.
#[must_use]
pub fn format_message(msg: &ChatMessage) -> String {
    let speaker = match msg.role {
        Role::User => "you",
        Role::Bot => "floatchat",
        Role::System => "--",
    };
    let body = match &msg.content {
        Content::Pending => "...",
        other => other.as_str(),
    };
    match msg.timestamp {
        Some(at) => format!("[{at}] {speaker}: {body}"),
        None => format!("{speaker}: {body}"),
    }
}

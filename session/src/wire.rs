//! JSON bodies exchanged with the chat service and its single error class.
//!
//! ```text
//! POST /chat  { "message": "...", "selected_float": "..." | null }
//! 200         { "response": "<markup>" }
//! ```

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

/// Chat endpoint the browser UI posts to.
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

/// Request body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Always present on the wire; `null` when no float is selected.
    pub selected_float: Option<String>,
}

/// Successful response body. `response` is pre-rendered markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Chat service unreachable.
///
/// The variants only record the cause for logging; every one of them is
/// handled the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced an HTTP response.
    #[error("chat request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("chat service returned HTTP {0}")]
    Status(u16),
    /// The response body was not a valid [`ChatResponse`].
    #[error("invalid chat response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Map an HTTP status code to `Ok` for 2xx, [`ChatError::Status`] otherwise.
///
/// # Errors
///
/// Returns [`ChatError::Status`] for any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ChatError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ChatError::Status(status)) }
}

/// Decode a raw response body.
///
/// # Errors
///
/// Returns [`ChatError::Decode`] when the body is not `{ "response": string }`.
pub fn decode_response(body: &str) -> Result<ChatResponse, ChatError> {
    Ok(serde_json::from_str(body)?)
}

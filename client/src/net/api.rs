//! Chat-service call.
//!
//! Client-side (hydrate): a real `fetch` via `gloo-net`.
//! Server-side (SSR): a stub that reports the service as unreachable, since
//! questions are only ever sent from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, undecodable body) comes back as
//! a `ChatError`; the session turns all of them into the same apology.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::wire::{ChatError, ChatRequest, ChatResponse};

/// Reason reported when the call is attempted outside the browser.
pub const NOT_IN_BROWSER: &str = "chat requests are only sent from the browser";

/// `POST` a question to the chat service at `endpoint`.
///
/// # Errors
///
/// Returns [`ChatError`] if the request cannot be sent, the service answers
/// with a non-success status, or the body is not `{ "response": string }`.
pub async fn send_chat(endpoint: &str, body: &ChatRequest) -> Result<ChatResponse, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(body)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        session::wire::check_status(resp.status())?;
        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ChatError::Transport(NOT_IN_BROWSER.to_owned()))
    }
}

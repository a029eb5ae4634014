//! Chat dispatcher: selection context plus transcript behind one owner.
//!
//! DESIGN
//! ======
//! `ChatSession` is a plain state machine with no I/O. A submission is split
//! in two halves so the browser (`spawn_local` + `fetch`) and the terminal
//! client (tokio + reqwest) can share it:
//!
//! 1. [`ChatSession::submit`] appends the user message and a pending bot
//!    placeholder, then returns a [`PendingRequest`] built from a snapshot of
//!    the selection context.
//! 2. The caller sends the request and passes the outcome to
//!    [`ChatSession::resolve`], which settles that placeholder.
//!
//! Several requests may be outstanding at once. Each one carries the id of
//! its own placeholder, so responses that arrive out of order still land in
//! the right place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::selection::SelectionContext;
use crate::transcript::{Content, DisplayTime, MessageId, Role, Transcript};
use crate::wire::{ChatError, ChatRequest, ChatResponse};

/// Shown in place of a bot answer when the chat service is unreachable.
pub const APOLOGY: &str = "Sorry, I'm having trouble connecting to my brain right now. Please try again later.";

/// Text of the system notice appended when a float becomes active.
#[must_use]
pub fn selection_notice(float_name: &str) -> String {
    format!("Now chatting about: {float_name}. Ask me a question about it!")
}

/// A chat request waiting to be sent, tied to its transcript placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub placeholder: MessageId,
    pub body: ChatRequest,
}

/// Session-scoped chat state owned by the UI controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSession {
    selection: SelectionContext,
    transcript: Transcript,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `float_name` the active float and announce it in the transcript.
    pub fn select(&mut self, float_name: &str) -> MessageId {
        self.selection.set(float_name);
        self.transcript
            .push(Role::System, Content::Text(selection_notice(float_name)), None)
    }

    /// Active float name, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.selection.active()
    }

    /// Record a user question and produce the request to send for it.
    ///
    /// Returns `None` without touching the transcript when `text` is empty
    /// after trimming.
    pub fn submit(&mut self, text: &str, now: Option<DisplayTime>) -> Option<PendingRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript
            .push(Role::User, Content::Text(text.to_owned()), now);
        let placeholder = self.transcript.push(Role::Bot, Content::Pending, None);

        Some(PendingRequest {
            placeholder,
            body: ChatRequest { message: text.to_owned(), selected_float: self.selection.current() },
        })
    }

    /// Settle a placeholder with the chat-service outcome.
    ///
    /// Success inserts the response markup verbatim. Any error becomes
    /// [`APOLOGY`] and is logged. Returns `false` if the placeholder is
    /// unknown or already settled.
    pub fn resolve(
        &mut self,
        placeholder: MessageId,
        outcome: Result<ChatResponse, ChatError>,
        now: Option<DisplayTime>,
    ) -> bool {
        let content = match outcome {
            Ok(resp) => Content::Markup(resp.response),
            Err(err) => {
                log::warn!("chat service unavailable (message {}): {err}", placeholder.0);
                Content::Text(APOLOGY.to_owned())
            }
        };
        let settled = self.transcript.settle(placeholder, content, now);
        if !settled {
            log::debug!("ignoring response for settled or unknown message {}", placeholder.0);
        }
        settled
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    /// Number of requests still awaiting a response.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.transcript.pending_ids().count()
    }
}

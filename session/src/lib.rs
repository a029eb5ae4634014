//! Chat session core shared by the browser UI and the terminal client.
//!
//! This crate is UI-framework agnostic. It owns the float catalog, the
//! selection context, the chat transcript and the dispatcher state machine
//! that turns user input into chat-service requests and folds responses back
//! into the transcript. Network I/O is left to the caller: [`ChatSession::submit`]
//! hands back a [`PendingRequest`] and the caller reports the outcome through
//! [`ChatSession::resolve`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`float`] | Static catalog of known floats |
//! | [`search`] | Case-insensitive substring search over the catalog |
//! | [`selection`] | The active-float slot |
//! | [`transcript`] | Ordered chat log and message types |
//! | [`session`] | Dispatcher state machine tying the above together |
//! | [`map`] | Map view model: fly-to target and the single search marker |
//! | [`wire`] | Chat-service request/response bodies and errors |

pub mod float;
pub mod map;
pub mod search;
pub mod selection;
pub mod session;
pub mod transcript;
pub mod wire;

pub use float::{Coordinates, FLOATS, Float};
pub use search::Suggestions;
pub use selection::SelectionContext;
pub use session::{APOLOGY, ChatSession, PendingRequest};
pub use transcript::{ChatMessage, Content, DisplayTime, MessageId, Role, Transcript};
pub use wire::{ChatError, ChatRequest, ChatResponse};

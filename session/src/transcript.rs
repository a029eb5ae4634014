//! Ordered chat log and the message types stored in it.
//!
//! DESIGN
//! ======
//! The transcript is append-only. The single exception is a bot placeholder
//! whose content is [`Content::Pending`]: it is settled in place exactly once
//! by [`Transcript::settle`], keeping its position and id.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use std::fmt;

/// Session-unique message identifier, assigned in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Who produced a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
    /// Context notices such as "Now chatting about ...".
    System,
}

impl Role {
    /// CSS class used by the chat view.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
            Self::System => "bot-message system-notification",
        }
    }
}

/// Message body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Rendered as plain text.
    Text(String),
    /// Backend-produced markup, rendered verbatim as HTML.
    Markup(String),
    /// Placeholder awaiting a chat-service response.
    Pending,
}

impl Content {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Raw body text; empty while pending.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Markup(s) => s,
            Self::Pending => "",
        }
    }
}

/// Wall-clock display time (`HH:MM`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayTime {
    hour: u8,
    minute: u8,
}

impl DisplayTime {
    /// Returns `None` when `hour` or `minute` is out of range.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub content: Content,
    pub timestamp: Option<DisplayTime>,
}

impl ChatMessage {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.content.is_pending()
    }
}

/// Chronological list of chat messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its id.
    pub fn push(&mut self, role: Role, content: Content, timestamp: Option<DisplayTime>) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content, timestamp });
        id
    }

    /// Replace a pending placeholder's content in place.
    ///
    /// Returns `false` (and changes nothing) when `id` is unknown or the
    /// message has already been settled.
    pub fn settle(&mut self, id: MessageId, content: Content, timestamp: Option<DisplayTime>) -> bool {
        let Some(msg) = self.get_mut(id) else {
            return false;
        };
        if !msg.is_pending() {
            return false;
        }
        msg.content = content;
        msg.timestamp = timestamp;
        true
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        // Ids are assigned in push order, so the vector is sorted by id.
        self.messages
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|idx| &self.messages[idx])
    }

    fn get_mut(&mut self, id: MessageId) -> Option<&mut ChatMessage> {
        let idx = self.messages.binary_search_by_key(&id, |m| m.id).ok()?;
        self.messages.get_mut(idx)
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Ids of placeholders still awaiting a response, oldest first.
    pub fn pending_ids(&self) -> impl Iterator<Item = MessageId> + '_ {
        self.messages.iter().filter(|m| m.is_pending()).map(|m| m.id)
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

//! Conversation list view model: header plus one bubble per message.

use chrono::{DateTime, Utc};

use super::bubble::{render_bubble, Bubble};
use crate::types::conversation::participants_of;
use crate::types::Message;

/// Who the conversation is with, from the viewing user's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationHeader {
    /// Exactly one other participant
    Counterpart(String),
    /// Zero or several other participants (group thread, or viewer not in it)
    Group(Vec<String>),
    /// No messages to derive a header from
    Empty,
}

impl ConversationHeader {
    /// Display text for the header.
    pub fn label(&self) -> String {
        match self {
            ConversationHeader::Counterpart(name) => name.clone(),
            ConversationHeader::Group(names) if names.is_empty() => {
                "No other participants".to_string()
            }
            ConversationHeader::Group(names) => names.join(", "),
            ConversationHeader::Empty => "No messages".to_string(),
        }
    }
}

/// Rendered conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationView {
    pub header: ConversationHeader,
    /// One bubble per message, in input order
    pub bubbles: Vec<Bubble>,
}

impl ConversationView {
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

/// Derive the header from every participant except the viewer.
pub fn derive_header(messages: &[Message], viewer: &str) -> ConversationHeader {
    if messages.is_empty() {
        return ConversationHeader::Empty;
    }

    let mut others = participants_of(messages);
    others.remove(viewer);

    if others.len() == 1 {
        if let Some(name) = others.pop_first() {
            return ConversationHeader::Counterpart(name);
        }
    }
    ConversationHeader::Group(others.into_iter().collect())
}

/// Counterpart according to the first message only.
///
/// Only meaningful for two-party threads; `None` on empty input.
pub fn first_message_counterpart<'a>(messages: &'a [Message], viewer: &str) -> Option<&'a str> {
    messages.first().map(|first| {
        if first.receiver == viewer {
            first.sender.as_str()
        } else {
            first.receiver.as_str()
        }
    })
}

/// Render a whole conversation as seen by `viewer` at instant `now`.
///
/// Never fails: a message whose timestamp does not parse still gets a
/// bubble, labelled with [`UNKNOWN_TIME_LABEL`](super::UNKNOWN_TIME_LABEL).
pub fn render_list(messages: &[Message], viewer: &str, now: DateTime<Utc>) -> ConversationView {
    let bubbles = messages
        .iter()
        .enumerate()
        .map(|(index, message)| match render_bubble(message, viewer, now) {
            Ok(bubble) => bubble,
            Err(e) => {
                tracing::warn!(index, sender = %message.sender, "Rendering without time: {}", e);
                Bubble::without_time(message, viewer)
            }
        })
        .collect();

    ConversationView {
        header: derive_header(messages, viewer),
        bubbles,
    }
}

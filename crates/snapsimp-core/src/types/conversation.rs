//! Conversation abstraction for exported chat history
//!
//! A [`Conversation`] is loaded once, wholly, from a data source and is
//! immutable afterwards. Messages stay in the order the source provided.

use std::collections::BTreeSet;

use super::message::Message;
use crate::error::SnapResult;

/// The full ordered history between a fixed set of participants.
///
/// # Example
///
/// ```
/// use snapsimp_core::{Conversation, Message};
///
/// let conversation = Conversation::new(vec![
///     Message::text("alice", "bob", "hey", "2023-05-01 12:00:00 UTC"),
///     Message::media("bob", "alice", "2023-05-01 12:01:00 UTC"),
/// ])
/// .unwrap();
///
/// assert_eq!(conversation.len(), 2);
/// assert!(conversation.participants().contains("bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Build a conversation, validating every message.
    ///
    /// Timestamps are not parsed here; a bad timestamp only affects the
    /// message it belongs to when rendered.
    pub fn new(messages: Vec<Message>) -> SnapResult<Self> {
        for message in &messages {
            message.validate()?;
        }
        Ok(Self { messages })
    }

    /// Messages in source order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the conversation is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Every identifier appearing as sender or receiver.
    pub fn participants(&self) -> BTreeSet<String> {
        participants_of(&self.messages)
    }

    /// Whether `user` appears anywhere in the conversation.
    pub fn has_participant(&self, user: &str) -> bool {
        self.messages
            .iter()
            .any(|m| m.sender == user || m.receiver == user)
    }

    pub fn first_message(&self) -> Option<&Message> {
        self.messages.first()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Participants of an arbitrary message slice.
pub fn participants_of(messages: &[Message]) -> BTreeSet<String> {
    messages
        .iter()
        .flat_map(|m| [m.sender.clone(), m.receiver.clone()])
        .collect()
}

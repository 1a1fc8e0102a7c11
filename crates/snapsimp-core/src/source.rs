//! Conversation data sources.
//!
//! The renderer takes a [`Conversation`] value however it was obtained.
//! [`JsonFileSource`] reads the JSON produced from a chat export;
//! [`StaticSource`] hands out an in-memory value.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SnapResult;
use crate::types::{Conversation, Message};

/// Anything that can produce a conversation.
pub trait ConversationSource {
    fn load(&self) -> SnapResult<Conversation>;
}

/// Accepted JSON document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConversationDocument {
    /// `{ "chats": [ ... ] }`
    Wrapped { chats: Vec<Message> },
    /// `[ ... ]`
    Bare(Vec<Message>),
}

/// Parse a conversation from JSON text.
pub fn parse_conversation_json(json: &str) -> SnapResult<Conversation> {
    let document: ConversationDocument = serde_json::from_str(json)?;
    let messages = match document {
        ConversationDocument::Wrapped { chats } => chats,
        ConversationDocument::Bare(messages) => messages,
    };
    Conversation::new(messages)
}

/// Loads a conversation from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConversationSource for JsonFileSource {
    fn load(&self) -> SnapResult<Conversation> {
        let json = std::fs::read_to_string(&self.path)?;
        let conversation = parse_conversation_json(&json)?;
        tracing::info!(
            path = %self.path.display(),
            messages = conversation.len(),
            "Loaded conversation"
        );
        Ok(conversation)
    }
}

/// Hands out a fixed conversation.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    conversation: Conversation,
}

impl StaticSource {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }
}

impl ConversationSource for StaticSource {
    fn load(&self) -> SnapResult<Conversation> {
        Ok(self.conversation.clone())
    }
}

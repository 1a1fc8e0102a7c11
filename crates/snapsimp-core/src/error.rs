//! Error types for SnapSimp

use thiserror::Error;

/// Main error type for SnapSimp operations
#[derive(Error, Debug)]
pub enum SnapError {
    /// A message timestamp could not be parsed into an instant
    #[error("Invalid timestamp {value:?}: {reason}")]
    DataFormat {
        /// The raw timestamp as delivered by the data source
        value: String,
        /// Why parsing failed
        reason: String,
    },

    /// Operation requires at least one message
    #[error("Conversation has no messages")]
    EmptyConversation,

    /// Message violates the data model (e.g. sender equals receiver)
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// User is not a participant of the conversation
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SnapError {
    fn from(err: serde_json::Error) -> Self {
        SnapError::Serialization(err.to_string())
    }
}

/// Result type alias using SnapError
pub type SnapResult<T> = Result<T, SnapError>;

//! Chat message records as delivered by a conversation data source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SnapError, SnapResult};
use crate::time;

/// Kind of chat event.
///
/// Media messages carry no renderable text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    Text,
    Media,
}

/// Raw timestamp value, kept as delivered so that a malformed value only
/// fails the render of its own message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// RFC 3339 or `YYYY-MM-DD HH:MM:SS UTC`
    Text(String),
    /// Unix epoch in milliseconds
    EpochMillis(i64),
    /// Any other JSON value (float, null, object); never parses
    Other(serde_json::Value),
}

impl Timestamp {
    /// Parse into an absolute instant.
    pub fn to_instant(&self) -> SnapResult<DateTime<Utc>> {
        match self {
            Timestamp::Text(raw) => time::parse_timestamp(raw),
            Timestamp::EpochMillis(millis) => time::from_epoch_millis(*millis),
            Timestamp::Other(value) => Err(SnapError::DataFormat {
                value: value.to_string(),
                reason: "expected a string or integer epoch milliseconds".to_string(),
            }),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp::Text(instant.to_rfc3339())
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Timestamp::Text(raw.to_string())
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp::EpochMillis(millis)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Text(raw) => write!(f, "{}", raw),
            Timestamp::EpochMillis(millis) => write!(f, "{}ms", millis),
            Timestamp::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One chat event between a sender and a receiver.
///
/// # Example
///
/// ```
/// use snapsimp_core::Message;
///
/// let msg = Message::text("alice", "bob", "hey!", "2023-05-01 12:00:00 UTC");
/// assert!(msg.is_outgoing("alice"));
/// assert!(!msg.is_outgoing("bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Username of the originator
    pub sender: String,
    /// Username of the recipient
    pub receiver: String,
    /// Text or media
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Body, meaningful only for [`MessageKind::Text`]
    #[serde(default)]
    pub text: String,
    /// When the sender's device sent the message
    pub timestamp: Timestamp,
}

impl Message {
    /// Create a text message.
    pub fn text(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<Timestamp>,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            kind: MessageKind::Text,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create a media message (no text body).
    pub fn media(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        timestamp: impl Into<Timestamp>,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            kind: MessageKind::Media,
            text: String::new(),
            timestamp: timestamp.into(),
        }
    }

    /// Whether the viewing user sent this message.
    pub fn is_outgoing(&self, viewer: &str) -> bool {
        self.sender == viewer
    }

    /// Parse the timestamp into an absolute instant.
    pub fn instant(&self) -> SnapResult<DateTime<Utc>> {
        self.timestamp.to_instant()
    }

    /// Check the data model invariants that hold regardless of rendering.
    pub fn validate(&self) -> SnapResult<()> {
        if self.sender == self.receiver {
            return Err(SnapError::InvalidMessage(format!(
                "sender and receiver are both {:?}",
                self.sender
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_export_record() {
        let json = r#"{
            "sender": "alice",
            "receiver": "bob",
            "type": "TEXT",
            "text": "hello",
            "timestamp": "2023-05-01 12:00:00 UTC"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.text, "hello");
        assert_eq!(
            msg.instant().unwrap(),
            Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_media_without_text() {
        let json = r#"{"sender":"a","receiver":"b","type":"MEDIA","timestamp":1682942400000}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.kind, MessageKind::Media);
        assert!(msg.text.is_empty());
        assert_eq!(msg.timestamp, Timestamp::EpochMillis(1_682_942_400_000));
        assert!(msg.instant().is_ok());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"sender":"a","receiver":"b","type":"STICKER","timestamp":0}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn test_is_outgoing() {
        let msg = Message::text("alice", "bob", "hi", 0i64);
        assert!(msg.is_outgoing("alice"));
        assert!(!msg.is_outgoing("bob"));
        assert!(!msg.is_outgoing("carol"));
    }

    #[test]
    fn test_validate_rejects_self_message() {
        let msg = Message::text("alice", "alice", "note to self", 0i64);
        assert!(matches!(msg.validate(), Err(SnapError::InvalidMessage(_))));
        assert!(Message::media("alice", "bob", 0i64).validate().is_ok());
    }

    #[test]
    fn test_malformed_timestamp_is_data_error() {
        let msg = Message::text("alice", "bob", "hi", "not a time");
        assert!(matches!(msg.instant(), Err(SnapError::DataFormat { .. })));
    }

    #[test]
    fn test_timestamp_from_instant_roundtrips() {
        let instant = Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap();
        let ts = Timestamp::from(instant);
        assert_eq!(ts.to_instant().unwrap(), instant);
    }

    #[test]
    fn test_unsupported_timestamp_value_defers_error() {
        for raw in ["1682942400000.5", "null", "{\"at\":1}"] {
            let json = format!(
                r#"{{"sender":"a","receiver":"b","type":"TEXT","text":"hi","timestamp":{}}}"#,
                raw
            );
            let msg: Message = serde_json::from_str(&json).unwrap();
            assert!(matches!(msg.timestamp, Timestamp::Other(_)));
            assert!(matches!(msg.instant(), Err(SnapError::DataFormat { .. })));
        }
    }
}

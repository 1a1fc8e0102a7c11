//! Descriptive statistics over a conversation.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::{SnapError, SnapResult};
use crate::types::{Conversation, MessageKind};

/// Summary of who sent what, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationStats {
    pub total: usize,
    pub text_count: usize,
    pub media_count: usize,
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
    /// User who sent the most messages
    pub dominant_sender: String,
    /// User who received the most messages
    pub dominant_receiver: String,
    sent: BTreeMap<String, usize>,
    received: BTreeMap<String, usize>,
}

impl ConversationStats {
    /// Compute statistics for a non-empty conversation.
    ///
    /// Every timestamp must parse; earliest/latest are taken over all
    /// messages regardless of source order.
    pub fn compute(conversation: &Conversation) -> SnapResult<Self> {
        let messages = conversation.messages();
        if messages.is_empty() {
            return Err(SnapError::EmptyConversation);
        }

        let mut sent: BTreeMap<String, usize> = BTreeMap::new();
        let mut received: BTreeMap<String, usize> = BTreeMap::new();
        let mut earliest: Option<DateTime<Utc>> = None;
        let mut latest: Option<DateTime<Utc>> = None;
        let mut media_count = 0;

        for message in messages {
            let instant = message.instant()?;
            earliest = Some(earliest.map_or(instant, |e| e.min(instant)));
            latest = Some(latest.map_or(instant, |l| l.max(instant)));

            *sent.entry(message.sender.clone()).or_default() += 1;
            *received.entry(message.receiver.clone()).or_default() += 1;
            if message.kind == MessageKind::Media {
                media_count += 1;
            }
        }

        // Participants who only sent (or only received) still count as zero.
        for user in conversation.participants() {
            sent.entry(user.clone()).or_default();
            received.entry(user).or_default();
        }

        let (earliest, latest) = match (earliest, latest) {
            (Some(e), Some(l)) => (e, l),
            _ => return Err(SnapError::EmptyConversation),
        };

        Ok(Self {
            total: messages.len(),
            text_count: messages.len() - media_count,
            media_count,
            earliest,
            latest,
            dominant_sender: most_common(&sent),
            dominant_receiver: most_common(&received),
            sent,
            received,
        })
    }

    /// Time between the earliest and latest message.
    pub fn duration(&self) -> Duration {
        self.latest - self.earliest
    }

    /// Number of messages `user` sent.
    pub fn sent_by(&self, user: &str) -> SnapResult<usize> {
        self.sent
            .get(user)
            .copied()
            .ok_or_else(|| SnapError::UnknownParticipant(user.to_string()))
    }

    /// Number of messages `user` received.
    pub fn received_by(&self, user: &str) -> SnapResult<usize> {
        self.received
            .get(user)
            .copied()
            .ok_or_else(|| SnapError::UnknownParticipant(user.to_string()))
    }
}

/// Highest count wins; ties go to the alphabetically first name.
fn most_common(counts: &BTreeMap<String, usize>) -> String {
    let mut best: Option<(&String, usize)> = None;
    for (name, &count) in counts {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((name, count)),
        }
    }
    best.map(|(name, _)| name.clone()).unwrap_or_default()
}

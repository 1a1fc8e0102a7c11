//! Message bubble view model.

use chrono::{DateTime, Utc};

use crate::error::SnapResult;
use crate::time::relative_label;
use crate::types::{Message, MessageKind};

/// Label shown in place of media content. Media payloads are never fetched.
pub const MEDIA_PLACEHOLDER: &str = "[Media]";

/// Time label used when a message timestamp cannot be parsed.
pub const UNKNOWN_TIME_LABEL: &str = "unknown time";

/// Direction of a message relative to the viewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// Outgoing iff the viewing user is the sender.
    pub fn of(message: &Message, viewer: &str) -> Self {
        if message.is_outgoing(viewer) {
            Direction::Outgoing
        } else {
            Direction::Incoming
        }
    }

    pub fn is_outgoing(&self) -> bool {
        matches!(self, Direction::Outgoing)
    }

    /// Outgoing bubbles sit on the trailing edge, incoming on the leading edge.
    pub fn alignment(&self) -> Alignment {
        match self {
            Direction::Outgoing => Alignment::Trailing,
            Direction::Incoming => Alignment::Leading,
        }
    }
}

/// Horizontal placement of a bubble in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Leading,
    Trailing,
}

/// What a bubble displays as its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BubbleContent {
    /// Message text, verbatim
    Text(String),
    /// Fixed placeholder for media messages
    MediaPlaceholder,
}

impl BubbleContent {
    fn of(message: &Message) -> Self {
        match message.kind {
            MessageKind::Media => BubbleContent::MediaPlaceholder,
            MessageKind::Text => BubbleContent::Text(message.text.clone()),
        }
    }

    /// Text to display for this content.
    pub fn label(&self) -> &str {
        match self {
            BubbleContent::Text(text) => text,
            BubbleContent::MediaPlaceholder => MEDIA_PLACEHOLDER,
        }
    }
}

/// A single rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub direction: Direction,
    pub content: BubbleContent,
    /// Relative time such as "3 days ago"; depends on the render instant
    pub time_label: String,
}

impl Bubble {
    pub fn alignment(&self) -> Alignment {
        self.direction.alignment()
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction.is_outgoing()
    }

    /// Bubble for a message whose timestamp could not be parsed.
    pub(crate) fn without_time(message: &Message, viewer: &str) -> Self {
        Self {
            direction: Direction::of(message, viewer),
            content: BubbleContent::of(message),
            time_label: UNKNOWN_TIME_LABEL.to_string(),
        }
    }
}

/// Render one message as seen by `viewer` at instant `now`.
///
/// Fails with [`SnapError::DataFormat`](crate::SnapError::DataFormat) when the
/// timestamp does not parse.
pub fn render_bubble(message: &Message, viewer: &str, now: DateTime<Utc>) -> SnapResult<Bubble> {
    let instant = message.instant()?;
    Ok(Bubble {
        direction: Direction::of(message, viewer),
        content: BubbleContent::of(message),
        time_label: relative_label(instant, now),
    })
}

//! SnapSimp Core Library
//!
//! Rendering and selection logic for browsing an exported Snapchat chat
//! history.
//!
//! ## Overview
//!
//! - [`types`]: [`Message`] and [`Conversation`], loaded once and immutable
//! - [`source`]: where conversations come from ([`JsonFileSource`], [`StaticSource`])
//! - [`render`]: pure view models for message bubbles and the conversation list
//! - [`selection`]: the confirm-before-clear file selection used by the export tool rows
//! - [`stats`]: descriptive statistics over a conversation
//!
//! Front ends (the desktop app and the CLI) only translate view models into
//! markup or terminal lines.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Utc;
//! use snapsimp_core::{render_list, Conversation, Message};
//!
//! let conversation = Conversation::new(vec![
//!     Message::text("alice", "bob", "are we still on?", "2023-05-01 12:00:00 UTC"),
//!     Message::media("bob", "alice", "2023-05-01 12:02:00 UTC"),
//! ])
//! .unwrap();
//!
//! let view = render_list(conversation.messages(), "alice", Utc::now());
//! assert_eq!(view.header.label(), "bob");
//! assert_eq!(view.bubbles.len(), 2);
//! ```

pub mod error;
pub mod layout;
pub mod render;
pub mod selection;
pub mod source;
pub mod stats;
pub mod time;
pub mod types;

// Re-exports
pub use error::{SnapError, SnapResult};
pub use layout::NavLayout;
pub use render::{
    render_bubble, render_list, Alignment, Bubble, BubbleContent, ConversationHeader,
    ConversationView, Direction,
};
pub use selection::{ClearDecision, FileHandle, FileSelection, PickOutcome, UploadSlot};
pub use source::{ConversationSource, JsonFileSource, StaticSource};
pub use stats::ConversationStats;
pub use types::*;

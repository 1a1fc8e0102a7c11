//! Context providers for SnapSimp.
//!
//! The conversation is loaded once in `main` and injected through
//! `LaunchBuilder::with_context`; components read it with
//! [`use_viewer_context`]. The nav layout signal is provided by `App`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let ctx = use_viewer_context();
//! let layout = use_nav_layout();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use snapsimp_core::{Conversation, ConversationSource, ConversationStats, NavLayout};

/// Outcome of loading the conversation at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversationState {
    Loaded(Arc<Conversation>),
    /// Load failed; the reason is shown in the chat region only
    Unavailable(String),
}

/// Conversation plus the user it is viewed as.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerContext {
    pub conversation: ConversationState,
    pub viewer: String,
}

impl ViewerContext {
    /// Load from `source`. Without an explicit viewer, the conversation's
    /// dominant sender is used.
    pub fn load(source: &impl ConversationSource, viewer: Option<String>) -> Self {
        match source.load() {
            Ok(conversation) => {
                let viewer = viewer.unwrap_or_else(|| default_viewer(&conversation));
                tracing::info!(viewer = %viewer, messages = conversation.len(), "Conversation ready");
                Self {
                    conversation: ConversationState::Loaded(Arc::new(conversation)),
                    viewer,
                }
            }
            Err(e) => {
                tracing::error!("Failed to load conversation: {}", e);
                Self {
                    conversation: ConversationState::Unavailable(e.to_string()),
                    viewer: viewer.unwrap_or_default(),
                }
            }
        }
    }
}

fn default_viewer(conversation: &Conversation) -> String {
    match ConversationStats::compute(conversation) {
        Ok(stats) => stats.dominant_sender,
        Err(_) => conversation
            .first_message()
            .map(|m| m.sender.clone())
            .unwrap_or_default(),
    }
}

/// Hook to access the loaded conversation and viewing user.
pub fn use_viewer_context() -> ViewerContext {
    use_context::<ViewerContext>()
}

/// Hook to access the nav layout derived from the window width.
pub fn use_nav_layout() -> Signal<NavLayout> {
    use_context::<Signal<NavLayout>>()
}

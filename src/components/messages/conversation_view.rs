//! Conversation Panel Component
//!
//! Header naming the other participant, then one bubble per message in
//! source order.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;
use snapsimp_core::{render_list, Conversation};

use super::message_bubble::MessageBubble;

/// How often relative time labels are refreshed
const TIME_LABEL_REFRESH: Duration = Duration::from_secs(60);

#[component]
pub fn ConversationPanel(
    /// Conversation loaded at startup
    conversation: Arc<Conversation>,
    /// User whose messages are shown as sent
    viewer: String,
) -> Element {
    let mut now = use_signal(Utc::now);

    use_future(move || async move {
        loop {
            tokio::time::sleep(TIME_LABEL_REFRESH).await;
            now.set(Utc::now());
        }
    });

    let view = render_list(conversation.messages(), &viewer, now());
    let header = view.header.label();
    let bubbles = view.bubbles;

    rsx! {
        div { class: "conversation-view",
            header { class: "conversation-header",
                h2 { class: "conversation-contact-name", "{header}" }
                p { class: "conversation-meta", "{conversation.len()} messages" }
            }

            div { class: "conversation-messages",
                if bubbles.is_empty() {
                    div { class: "conversation-empty",
                        p { class: "empty-text", "No messages yet" }
                    }
                } else {
                    for (index, bubble) in bubbles.into_iter().enumerate() {
                        MessageBubble { key: "{index}", bubble }
                    }
                }
            }
        }
    }
}

//! Message Bubble Component
//!
//! Chat-style message bubbles with visual distinction between sent and received.

use dioxus::prelude::*;
use snapsimp_core::{Alignment, Bubble, BubbleContent};

/// Individual message bubble component
#[component]
pub fn MessageBubble(bubble: Bubble) -> Element {
    let (row_class, bubble_class) = match bubble.alignment() {
        Alignment::Trailing => (
            "message-row message-row-sent",
            "message-bubble message-bubble-sent",
        ),
        Alignment::Leading => (
            "message-row message-row-received",
            "message-bubble message-bubble-received",
        ),
    };

    let content_class = match bubble.content {
        BubbleContent::MediaPlaceholder => "message-bubble-content message-bubble-media",
        BubbleContent::Text(_) => "message-bubble-content",
    };

    rsx! {
        div { class: "{row_class}",
            div { class: "{bubble_class}",
                div { class: "{content_class}", "{bubble.content.label()}" }
                div { class: "message-bubble-time", "{bubble.time_label}" }
            }
        }
    }
}

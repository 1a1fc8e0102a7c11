//! Chat Page
//!
//! Shows the conversation injected at startup, or a notice if it could
//! not be loaded. A load failure only affects this region.

use dioxus::prelude::*;

use crate::components::messages::ConversationPanel;
use crate::components::{NavBar, NavLocation};
use crate::context::{use_viewer_context, ConversationState};

#[component]
pub fn Chat() -> Element {
    let ctx = use_viewer_context();

    let body = match ctx.conversation {
        ConversationState::Loaded(conversation) => rsx! {
            ConversationPanel { conversation, viewer: ctx.viewer.clone() }
        },
        ConversationState::Unavailable(reason) => rsx! {
            div { class: "region-error",
                p { class: "region-error-title", "Conversation unavailable" }
                p { class: "region-error-detail", "{reason}" }
                p { class: "region-error-hint",
                    "Start with --conversation <file.json> to choose a conversation."
                }
            }
        },
    };

    rsx! {
        div { class: "page",
            NavBar { current: NavLocation::Chat }

            main { class: "page-content page-content--chat",
                {body}
            }
        }
    }
}

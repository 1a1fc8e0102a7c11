//! Conversation rendering components

mod conversation_view;
mod message_bubble;

pub use conversation_view::ConversationPanel;
pub use message_bubble::MessageBubble;

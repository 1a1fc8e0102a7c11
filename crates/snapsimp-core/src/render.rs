//! View models for the conversation renderer.
//!
//! Renderers are pure functions from data (plus the instant "now") to view
//! models. Front ends map these to markup or terminal lines; they never
//! inspect [`Message`](crate::Message) fields directly.

pub mod bubble;
pub mod list;

pub use bubble::{
    render_bubble, Alignment, Bubble, BubbleContent, Direction, MEDIA_PLACEHOLDER,
    UNKNOWN_TIME_LABEL,
};
pub use list::{
    derive_header, first_message_counterpart, render_list, ConversationHeader, ConversationView,
};

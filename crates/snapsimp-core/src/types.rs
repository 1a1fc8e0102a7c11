//! Core types for SnapSimp
//!
//! The data model mirrors what a Snapchat chat export contains: individual
//! [`Message`] records and the [`Conversation`] they belong to.

pub mod conversation;
pub mod message;

pub use conversation::Conversation;
pub use message::{Message, MessageKind, Timestamp};

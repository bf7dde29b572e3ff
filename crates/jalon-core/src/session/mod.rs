//! Conversation domain model for the assistant.

mod message;
mod transcript;

pub use message::{ConversationMessage, MessageRole};
pub use transcript::Transcript;

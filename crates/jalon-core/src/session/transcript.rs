//! Append-only conversation transcript.

use super::message::{ConversationMessage, MessageRole};

/// The ordered log of one assistant conversation.
///
/// A transcript is seeded with a single assistant greeting and only ever
/// grows: messages are appended, never edited or removed. The first entry
/// is always the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ConversationMessage>,
}

impl Transcript {
    /// Creates a transcript seeded with the assistant greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ConversationMessage::now(MessageRole::Assistant, greeting)],
        }
    }

    /// Appends a user message.
    pub fn push_user(&mut self, content: &str) {
        self.messages
            .push(ConversationMessage::now(MessageRole::User, content));
    }

    /// Appends an assistant message.
    pub fn push_assistant(&mut self, content: &str) {
        self.messages
            .push(ConversationMessage::now(MessageRole::Assistant, content));
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Number of messages in the transcript. Always at least one.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// A seeded transcript is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent `n` messages, oldest first.
    ///
    /// Returns the whole transcript when it holds fewer than `n` entries.
    pub fn trailing(&self, n: usize) -> &[ConversationMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }
}

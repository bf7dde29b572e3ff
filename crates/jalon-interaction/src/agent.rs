//! Outbound text-generation contract.
//!
//! The session talks to its collaborator through [`GenerativeAgent`] so
//! the transport can be swapped out (or mocked) without touching the
//! state machine.

use async_trait::async_trait;

use jalon_core::Result;
use jalon_core::session::{ConversationMessage, MessageRole};

/// Role of one turn in the outbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    /// A turn authored by the user.
    User,
    /// A turn authored by the model.
    Model,
}

/// One turn of the conversation sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    /// Creates a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

impl From<&ConversationMessage> for Turn {
    fn from(message: &ConversationMessage) -> Self {
        let role = match message.role {
            MessageRole::User => TurnRole::User,
            MessageRole::Assistant => TurnRole::Model,
        };
        Self {
            role,
            text: message.content.clone(),
        }
    }
}

/// A text-generation collaborator.
///
/// Implementations perform exactly one call per `generate` invocation;
/// retry and quota policy belong to the service, not to this contract.
#[async_trait]
pub trait GenerativeAgent: Send + Sync {
    /// Sends the ordered turns and returns the generated text.
    async fn generate(&self, turns: &[Turn]) -> Result<String>;
}

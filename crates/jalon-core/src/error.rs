//! Error types for the Jalon workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the assistant pipeline.
///
/// Every fallible operation in the workspace (credential lookup, the
/// outbound Gemini call, snapshot serialization) surfaces one of these
/// variants. Date parsing is deliberately absent: the schedule module
/// falls back to a caller-supplied string instead of returning an error.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum JalonError {
    /// No credential source produced an API key.
    #[error("No API key found (sources checked: {})", .sources.join(", "))]
    MissingCredential {
        /// Source names, in the order they were consulted.
        sources: Vec<String>,
    },

    /// The service rejected the API key.
    #[error("API key rejected: {0}")]
    InvalidCredential(String),

    /// Transport-level failure (connect, timeout, non-auth HTTP error).
    #[error("Transport error: {message}")]
    Transport {
        status_code: Option<u16>,
        message: String,
    },

    /// The service answered but the body carried no usable text.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl JalonError {
    /// Creates an InvalidCredential error
    pub fn invalid_credential(message: impl Into<String>) -> Self {
        Self::InvalidCredential(message.into())
    }

    /// Creates a Transport error
    pub fn transport(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a MalformedResponse error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Check if this is a MissingCredential error
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }

    /// Check if this is an InvalidCredential error
    pub fn is_invalid_credential(&self) -> bool {
        matches!(self, Self::InvalidCredential(_))
    }
}

impl From<serde_json::Error> for JalonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A type alias for `Result<T, JalonError>`.
pub type Result<T> = std::result::Result<T, JalonError>;

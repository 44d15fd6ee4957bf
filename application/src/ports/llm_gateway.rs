//! LLM Gateway port
//!
//! Defines the interface for talking to a conversational model.

use async_trait::async_trait;
use survey_domain::{ChatbotError, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl From<GatewayError> for ChatbotError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Other(msg) => ChatbotError::Unknown(msg),
            other => ChatbotError::Api(other.to_string()),
        }
    }
}

/// What the model said in reply to one message.
///
/// A reply with no text, or only whitespace, is [`ModelReply::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    Text(String),
    Empty,
}

impl ModelReply {
    pub fn from_text(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.trim().is_empty() => ModelReply::Text(text),
            _ => ModelReply::Empty,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ModelReply::Text(text) => Some(text),
            ModelReply::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ModelReply::Empty)
    }
}

impl From<String> for ModelReply {
    fn from(text: String) -> Self {
        ModelReply::from_text(Some(text))
    }
}

/// Gateway for LLM communication
///
/// The gateway owns the credential and generation parameters; sessions
/// it starts inherit both.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Start a conversation whose first turn is `seed_context`
    async fn start_session(
        &self,
        model: &Model,
        seed_context: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM conversation.
///
/// Each successful `send` appends the message and the reply to the
/// conversation, so callers sharing a session must serialize access.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get the reply
    async fn send(&mut self, message: &str) -> Result<ModelReply, GatewayError>;

    /// Number of turns recorded so far, seed included
    fn turn_count(&self) -> usize;
}

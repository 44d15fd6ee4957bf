//! Chatbot error taxonomy

use serde::Serialize;
use thiserror::Error;

/// Failure kinds surfaced by the question pipeline.
///
/// Every failure is reduced to one of these before it reaches the user,
/// and the user only ever sees the fixed text attached to the kind.
#[derive(Error, Debug)]
pub enum ChatbotError {
    /// The model client could not be configured or failed at the
    /// transport/session level.
    #[error("API error: {0}")]
    Api(String),

    /// Malformed input reached a path that requires valid input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Anything that does not fit the other kinds.
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Discriminant of [`ChatbotError`], used where only the kind matters
/// (rendering, conversation logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Api,
    Validation,
    Unknown,
}

impl ChatbotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatbotError::Api(_) => ErrorKind::Api,
            ChatbotError::Validation(_) => ErrorKind::Validation,
            ChatbotError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Check if this error came from the model client
    pub fn is_api(&self) -> bool {
        matches!(self, ChatbotError::Api(_))
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Api => "api",
            ErrorKind::Validation => "validation",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

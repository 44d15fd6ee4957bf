//! Error types for the Gemini adapter

use survey_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Credential rejected (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Prompt blocked: {0}")]
    Blocked(String),
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Transport(e) => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Unauthorized { .. } => GatewayError::ConnectionError(error.to_string()),
            GeminiError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            GeminiError::Api { .. } | GeminiError::Blocked(_) => {
                GatewayError::RequestFailed(error.to_string())
            }
            GeminiError::Parse { .. } => GatewayError::Other(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_connection_error() {
        let err = GeminiError::Unauthorized {
            status: 403,
            message: "API key not valid".into(),
        };
        assert!(matches!(
            GatewayError::from(err),
            GatewayError::ConnectionError(_)
        ));
    }

    #[test]
    fn test_missing_model_maps_to_model_not_available() {
        let err = GeminiError::ModelNotFound("gemini-0".into());
        assert!(matches!(
            GatewayError::from(err),
            GatewayError::ModelNotAvailable(m) if m == "gemini-0"
        ));
    }

    #[test]
    fn test_parse_error_is_unclassified() {
        let err = GeminiError::Parse {
            error: "expected value".into(),
            raw: "<html>".into(),
        };
        assert!(matches!(GatewayError::from(err), GatewayError::Other(_)));
    }
}

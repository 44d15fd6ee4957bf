//! Error classification and rendering.
//!
//! Every failure that reaches a user passes through [`ErrorRenderer`]. The
//! user sees one of three fixed texts; the error detail only goes to the log.

use survey_domain::{ChatbotError, ErrorKind, messages};
use tracing::{error, warn};

/// Translates [`ChatbotError`] into caller-safe text.
pub struct ErrorRenderer;

impl ErrorRenderer {
    /// Log the error at the severity of its kind and return the fixed
    /// message for that kind.
    pub fn render(err: &ChatbotError, context: Option<&str>) -> &'static str {
        let location = match context {
            Some(ctx) => format!("An error occurred while {}", ctx),
            None => "An error occurred".to_string(),
        };

        match err {
            ChatbotError::Api(detail) => {
                error!("{}: API Error: {}", location, detail);
            }
            ChatbotError::Validation(detail) => {
                warn!("{}: Validation Error: {}", location, detail);
            }
            ChatbotError::Unknown(detail) => {
                error!(error = ?err, "{}: Unexpected Error: {}", location, detail);
            }
        }

        Self::message_for(err.kind())
    }

    /// The fixed text for a kind, without logging.
    pub fn message_for(kind: ErrorKind) -> &'static str {
        match kind {
            ErrorKind::Api => messages::API_FAILURE,
            ErrorKind::Validation => messages::VALIDATION_FAILURE,
            ErrorKind::Unknown => messages::UNKNOWN_FAILURE,
        }
    }
}

/// Shorthand for [`ErrorRenderer::render`].
pub fn classify_and_render(err: &ChatbotError, context: Option<&str>) -> &'static str {
    ErrorRenderer::render(err, context)
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Request-level failures of the HTTP front end
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Body missing, malformed, or without a non-empty `question` (400)
    #[error("No question provided")]
    MissingQuestion,
    /// No router was wired into the server state (500)
    #[error("Chat handler not initialized")]
    NotInitialized,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MissingQuestion => StatusCode::BAD_REQUEST,
            ServerError::NotInitialized => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if matches!(self, ServerError::NotInitialized) {
            tracing::error!("Received a chat request before the router was initialized");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

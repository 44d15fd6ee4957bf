//! Axum route handlers for the chat HTTP server.

use super::error::ServerError;
use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use survey_application::ResponseRouter;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state for the HTTP server.
///
/// The router is optional so that a server started without a model session
/// answers 500 instead of panicking.
#[derive(Clone, Default)]
pub struct ChatServerState {
    pub router: Option<Arc<ResponseRouter>>,
}

impl ChatServerState {
    pub fn new(router: Arc<ResponseRouter>) -> Self {
        Self {
            router: Some(router),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Build the axum router with all routes.
pub fn app_router(state: ChatServerState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health: liveness probe.
async fn health_handler(State(state): State<ChatServerState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "initialized": state.router.is_some(),
    }))
}

/// POST /chat: answer one question.
///
/// Any body that does not carry a non-blank `question` string is a 400.
/// Model failures are not HTTP errors: the router renders them as text.
async fn chat_handler(
    State(state): State<ChatServerState>,
    body: Option<Json<ChatRequest>>,
) -> Result<Json<ChatResponse>, ServerError> {
    let router = state.router.ok_or(ServerError::NotInitialized)?;

    let question = body
        .and_then(|Json(request)| request.question)
        .filter(|q| !q.trim().is_empty())
        .ok_or(ServerError::MissingQuestion)?;

    info!("HTTP question of length: {}", question.chars().count());
    let response = router.process_question(&question).await;

    Ok(Json(ChatResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Mutex;
    use survey_application::{
        GatewayError, LlmGateway, LlmSession, ModelReply, RouterSettings,
    };
    use survey_domain::{Model, SurveyDataset};
    use tower::ServiceExt;

    struct FixedSession {
        model: Model,
        reply: String,
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for FixedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&mut self, message: &str) -> Result<ModelReply, GatewayError> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(ModelReply::from(self.reply.clone()))
        }

        fn turn_count(&self) -> usize {
            1 + self.sent.lock().unwrap().len() * 2
        }
    }

    struct FixedGateway {
        reply: String,
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn start_session(
            &self,
            model: &Model,
            _seed_context: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(FixedSession {
                model: model.clone(),
                reply: self.reply.clone(),
                sent: self.sent.clone(),
            }))
        }
    }

    async fn state_with_reply(reply: &str) -> (ChatServerState, Arc<Mutex<Vec<String>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let gateway = Arc::new(FixedGateway {
            reply: reply.to_string(),
            sent: sent.clone(),
        });
        let settings = RouterSettings::for_dataset(&SurveyDataset::respondent(), Model::default());
        let router = ResponseRouter::start(gateway, settings).await.unwrap();
        (ChatServerState::new(Arc::new(router)), sent)
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (state, _) = state_with_reply("unused").await;
        let app = app_router(state);

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["initialized"], true);
    }

    #[tokio::test]
    async fn test_chat_direct_answer_skips_model() {
        let (state, sent) = state_with_reply("unused").await;
        let app = app_router(state);

        let response = app
            .oneshot(chat_request(r#"{"question": "What is the household income?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(
            json["response"],
            "Based on the survey data, the household yearly income is between $100,000 to $200,000."
        );
        assert!(sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_model_answer_is_trimmed() {
        let (state, sent) = state_with_reply("  The respondent owns a car.\n").await;
        let app = app_router(state);

        let response = app
            .oneshot(chat_request(r#"{"question": "Does the respondent own a car?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["response"], "The respondent owns a car.");
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_missing_question_is_bad_request() {
        for body in [r#"{}"#, r#"{"question": "   "}"#, r#"{"question": 7}"#, "not json"] {
            let (state, _) = state_with_reply("unused").await;
            let response = app_router(state).oneshot(chat_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json_body(response).await["error"], "No question provided");
        }
    }

    #[tokio::test]
    async fn test_chat_uninitialized_is_server_error() {
        let app = app_router(ChatServerState::default());

        let response = app
            .oneshot(chat_request(r#"{"question": "What is the credit score?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["error"],
            "Chat handler not initialized"
        );
    }

    #[tokio::test]
    async fn test_chat_short_question_gets_rephrase_message() {
        let (state, sent) = state_with_reply("unused").await;
        let response = app_router(state)
            .oneshot(chat_request(r#"{"question": "hi"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["response"],
            survey_domain::messages::REPHRASE_REQUEST
        );
        assert!(sent.lock().unwrap().is_empty());
    }
}

//! Gemini session management.
//!
//! The REST endpoint is stateless, so [`GeminiSession`] keeps the
//! conversation locally and sends the whole history on every call.

use crate::gemini::client::GeminiClient;
use crate::gemini::error::GeminiError;
use crate::gemini::types::{Content, GenerateContentRequest, GenerationConfig};
use async_trait::async_trait;
use survey_application::{GatewayError, GenerationParams, LlmSession, ModelReply};
use survey_domain::Model;
use tracing::{debug, warn};

pub struct GeminiSession {
    client: GeminiClient,
    model: Model,
    generation_config: GenerationConfig,
    history: Vec<Content>,
}

impl GeminiSession {
    /// Create a session whose first turn is the seed context, sent as a user message.
    pub fn new(
        client: GeminiClient,
        model: Model,
        params: &GenerationParams,
        seed_context: &str,
    ) -> Self {
        Self {
            client,
            model,
            generation_config: GenerationConfig::from(params),
            history: vec![Content::user(seed_context)],
        }
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Record a completed exchange.
    ///
    /// Failed calls never reach this, so a transport error leaves the
    /// history as it was.
    fn record_turn(&mut self, message: Content, reply: &ModelReply) {
        self.history.push(message);
        if let ModelReply::Text(text) = reply {
            self.history.push(Content::model(text.clone()));
        }
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&mut self, message: &str) -> Result<ModelReply, GatewayError> {
        let user_turn = Content::user(message);

        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest {
            contents: &contents,
            generation_config: &self.generation_config,
        };
        let response = self.client.generate(&self.model, &request).await?;

        if let Some(reason) = response.block_reason() {
            warn!("Gemini blocked the prompt: {}", reason);
            return Err(GeminiError::Blocked(reason.to_string()).into());
        }

        let reply = ModelReply::from_text(response.first_text());
        debug!(
            "Gemini replied with {} bytes",
            reply.text().map(str::len).unwrap_or(0)
        );

        self.record_turn(user_turn, &reply);
        Ok(reply)
    }

    fn turn_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::ApiKey;
    use crate::gemini::types::ROLE_MODEL;

    fn session() -> GeminiSession {
        let client = GeminiClient::new(ApiKey::new("test-key"), "http://127.0.0.1:9").unwrap();
        GeminiSession::new(
            client,
            Model::default(),
            &GenerationParams::default(),
            "seed context",
        )
    }

    #[test]
    fn test_session_starts_with_seed_turn() {
        let session = session();
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.history()[0], Content::user("seed context"));
    }

    #[test]
    fn test_record_turn_appends_reply() {
        let mut session = session();
        session.record_turn(
            Content::user("q"),
            &ModelReply::Text("a".to_string()),
        );
        assert_eq!(session.turn_count(), 3);
        assert_eq!(session.history()[2].role.as_deref(), Some(ROLE_MODEL));
    }

    #[test]
    fn test_empty_reply_records_only_question() {
        let mut session = session();
        session.record_turn(Content::user("q"), &ModelReply::Empty);
        assert_eq!(session.turn_count(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_history() {
        // nothing listens on port 9 of localhost
        let mut session = session();
        let result = session.send("Does the respondent own a car?").await;
        assert!(matches!(result, Err(GatewayError::ConnectionError(_))));
        assert_eq!(session.turn_count(), 1);
    }
}

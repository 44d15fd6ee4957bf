//! Gemini LLM Gateway implementation

use crate::credentials::ApiKey;
use crate::gemini::client::{DEFAULT_ENDPOINT, GeminiClient};
use crate::gemini::session::GeminiSession;
use async_trait::async_trait;
use survey_application::{GatewayError, GenerationParams, LlmGateway, LlmSession};
use survey_domain::Model;
use tracing::info;

/// LLM Gateway backed by the Gemini REST API
pub struct GeminiLlmGateway {
    client: GeminiClient,
    params: GenerationParams,
}

impl GeminiLlmGateway {
    /// Configure the gateway with a credential and fixed generation parameters.
    pub fn new(api_key: ApiKey, params: GenerationParams) -> Result<Self, GatewayError> {
        Self::with_endpoint(api_key, params, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(
        api_key: ApiKey,
        params: GenerationParams,
        endpoint: &str,
    ) -> Result<Self, GatewayError> {
        let client = GeminiClient::new(api_key, endpoint)?;
        info!("GeminiLlmGateway configured for {}", client.endpoint());
        Ok(Self { client, params })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn start_session(
        &self,
        model: &Model,
        seed_context: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.client.check_model(model).await?;

        let session = GeminiSession::new(
            self.client.clone(),
            model.clone(),
            &self.params,
            seed_context,
        );
        Ok(Box::new(session))
    }
}

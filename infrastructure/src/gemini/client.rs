//! HTTP client for the Gemini REST API.

use crate::credentials::ApiKey;
use crate::gemini::error::{GeminiError, Result};
use crate::gemini::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use reqwest::StatusCode;
use survey_domain::Model;
use tracing::debug;

/// Default base URL of the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Thin wrapper holding the HTTP client, credential and endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("survey-chatbot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_key,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model_url(&self, model: &Model) -> String {
        format!("{}/models/{}", self.endpoint, model.as_str())
    }

    /// Look the model up, which also proves the credential works.
    pub async fn check_model(&self, model: &Model) -> Result<()> {
        let response = self
            .http
            .get(self.model_url(model))
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        Err(classify_failure(status, &body, model))
    }

    pub async fn generate(
        &self,
        model: &Model,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse> {
        debug!(
            model = %model,
            turns = request.contents.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(format!("{}:generateContent", self.model_url(model)))
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify_failure(status, &body, model));
        }

        serde_json::from_str(&body).map_err(|e| GeminiError::Parse {
            error: e.to_string(),
            raw: body,
        })
    }
}

/// Turn a non-2xx reply into a [`GeminiError`].
pub fn classify_failure(status: StatusCode, body: &str, model: &Model) -> GeminiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GeminiError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        StatusCode::BAD_REQUEST if message.contains("API key") => GeminiError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        StatusCode::NOT_FOUND => GeminiError::ModelNotFound(model.to_string()),
        _ => GeminiError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

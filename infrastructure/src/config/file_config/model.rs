//! Model configuration from TOML (`[model]` section)

use super::ConfigValidationError;
use crate::gemini::client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use survey_application::{BehaviorConfig, GenerationParams};
use survey_domain::Model;

/// Raw model configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier, e.g. "gemini-1.5-flash"
    pub name: String,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
    /// Per-request timeout; unset waits indefinitely
    pub timeout_seconds: Option<u64>,
    /// Base URL of the REST API
    pub endpoint: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            name: Model::default().to_string(),
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
            response_mime_type: params.response_mime_type,
            timeout_seconds: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl FileModelConfig {
    pub fn model(&self) -> Model {
        Model::from(self.name.trim())
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
            response_mime_type: self.response_mime_type.clone(),
        }
    }

    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.timeout_seconds)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigValidationError::InvalidTemperature(self.temperature));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            issues.push(ConfigValidationError::InvalidTopP(self.top_p));
        }
        if self.top_k == 0 {
            issues.push(ConfigValidationError::InvalidTopK);
        }
        if self.max_output_tokens == 0 {
            issues.push(ConfigValidationError::InvalidMaxOutputTokens);
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults_match_generation_params() {
        let config = FileModelConfig::default();
        assert_eq!(config.generation_params(), GenerationParams::default());
        assert_eq!(config.model(), Model::Gemini15Flash);
        assert!(config.behavior().timeout.is_none());
    }

    #[test]
    fn test_timeout_conversion() {
        let config = FileModelConfig {
            timeout_seconds: Some(12),
            ..Default::default()
        };
        assert_eq!(config.behavior().timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    fn test_out_of_range_sampling_rejected() {
        let config = FileModelConfig {
            temperature: 3.5,
            top_p: -0.1,
            max_output_tokens: 0,
            timeout_seconds: Some(0),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::InvalidTemperature(3.5),
                ConfigValidationError::InvalidTopP(-0.1),
                ConfigValidationError::InvalidMaxOutputTokens,
                ConfigValidationError::InvalidTimeout,
            ]
        );
    }
}

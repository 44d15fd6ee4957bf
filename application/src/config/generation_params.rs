//! Sampling parameters for the model client.
//!
//! [`GenerationParams`] is fixed for the life of the process and applied to
//! every request; nothing varies it per question.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    /// Nucleus-sampling threshold.
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

impl GenerationParams {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.5);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.top_k, 40);
        assert_eq!(params.max_output_tokens, 8192);
        assert_eq!(params.response_mime_type, "text/plain");
    }

    #[test]
    fn test_builder_methods() {
        let params = GenerationParams::default()
            .with_temperature(0.1)
            .with_max_output_tokens(256);
        assert_eq!(params.temperature, 0.1);
        assert_eq!(params.max_output_tokens, 256);
    }
}

// Request/response types shared by LLM providers

use serde::{Deserialize, Serialize};

/// A single-turn text generation request
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    /// Fully rendered prompt text
    pub prompt: String,

    /// Model name (provider-specific); empty means the provider default
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 to 2.0, optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: String::new(), // Will be set by provider
            max_tokens: 512,
            temperature: None,
        }
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderResponse {
    /// Generated text, already trimmed
    pub text: String,

    /// Model that generated the response
    pub model: String,

    /// Why the model stopped generating
    pub finish_reason: Option<String>,

    /// Provider name (e.g., "gemini")
    pub provider: String,
}

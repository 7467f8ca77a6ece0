// Gemini API provider implementation
//
// Uses the generateContent endpoint with a single user turn.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{ProviderRequest, ProviderResponse};
use super::LlmProvider;
use crate::config::GeminiSettings;

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl GeminiProvider {
    /// Create a provider from settings. Fails if no key is configured.
    pub fn new(settings: &GeminiSettings) -> Result<Self> {
        let api_key = settings
            .api_key()
            .context("Gemini API key is not configured")?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            default_model: settings.model.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn to_gemini_request(request: &ProviderRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiTextPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            }),
        }
    }

    /// Pull the reply text out of the first candidate
    fn from_gemini_response(&self, model: String, response: GeminiResponse) -> Result<ProviderResponse> {
        if let Some(error) = response.error {
            anyhow::bail!("Gemini API returned an error: {}", error.message);
        }

        let candidate = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .context("Gemini returned no candidates in response")?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        let text = text.trim().to_string();

        if text.is_empty() {
            anyhow::bail!(
                "Gemini returned an empty reply (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            );
        }

        Ok(ProviderResponse {
            text,
            model,
            finish_reason: candidate.finish_reason,
            provider: self.name().to_string(),
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model.clone()
        };

        tracing::debug!(model = %model, prompt_chars = request.prompt.len(), "Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint(&model))
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::to_gemini_request(request))
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Gemini API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        self.from_gemini_response(model, gemini_response)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// Gemini API types

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

// LLM provider support
//
// The companion only needs "prompt in, text out". Providers hide the wire
// format and report every failure as an error; callers decide the fallback.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod gemini;
pub mod prompt;
pub mod types;

pub use factory::create_provider;
pub use gemini::GeminiProvider;
pub use prompt::PromptStyle;
pub use types::{ProviderRequest, ProviderResponse};

/// Trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and wait for the complete response.
    ///
    /// Exactly one attempt; no retries.
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Get the default model for this provider
    fn default_model(&self) -> &str;
}

// Companion: crisis screening, AI replies and rule-based fallbacks
//
// One `Companion` is built at startup and shared read-only by all requests.

mod comfort;
mod fallback;
mod response;

pub use comfort::ComfortKind;
pub use fallback::fallback_response;
pub use response::{CrisisLevel, ResponsePayload};

use anyhow::Result;
use rand::seq::SliceRandom;

use crate::config::Config;
use crate::crisis::{CrisisDetector, RiskLevel};
use crate::errors::CompanionError;
use crate::providers::{create_provider, LlmProvider, PromptStyle, ProviderRequest};
use crate::resources::{HelplineDirectory, Resources};

const HIGH_RISK_SUFFIX: &str =
    " I'm deeply concerned about your safety. Your life is precious and worth protecting.";
const MEDIUM_RISK_SUFFIX: &str = " Would it be helpful to see Indian mental health resources?";
pub const LOW_RISK_REPLY: &str = "I hear how much pain you're in, and I'm really concerned. Feelings of hopelessness can be overwhelming. You're not alone in this.";

/// `/chat` reply when the AI cannot answer
pub const CHAT_FALLBACK_REPLY: &str =
    "I'm here with you, even if I can't find the words right now. You're not alone in this moment. 💙";
/// `/quick-comfort` reply when the request cannot be served
pub const COMFORT_FALLBACK_REPLY: &str = "Let me offer you some comfort. You're not alone in this.";
/// `/set-name` reply when the name cannot be stored
pub const GENERIC_WELCOME: &str = "Welcome! I'm glad you're here. This is a safe space for you.";

const WELCOME_SUFFIX: &str = " You can share what's in your heart, use the comfort buttons, or just sit here in this peaceful space with me.";

/// Uniform pick from a phrase table; tables are validated non-empty
pub(crate) fn pick(list: &[String]) -> &str {
    list.choose(&mut rand::thread_rng())
        .map(String::as_str)
        .unwrap_or_default()
}

pub struct Companion {
    resources: Resources,
    detector: CrisisDetector,
    provider: Option<Box<dyn LlmProvider>>,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl Companion {
    /// Build from validated resource tables and an optional AI provider
    pub fn new(
        resources: Resources,
        provider: Option<Box<dyn LlmProvider>>,
    ) -> Result<Self, CompanionError> {
        resources.validate()?;
        let detector = CrisisDetector::new(resources.crisis_keywords.clone());

        Ok(Self {
            resources,
            detector,
            provider,
            max_tokens: 512,
            temperature: None,
        })
    }

    /// Load tables and the provider as described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let resources = match &config.resources_path {
            Some(path) => Resources::load_from_file(path)?,
            None => Resources::default(),
        };
        let provider = create_provider(&config.gemini)?;

        let companion = Self::new(resources, provider)?
            .with_generation(config.gemini.max_output_tokens, config.gemini.temperature);
        Ok(companion)
    }

    pub fn with_generation(mut self, max_tokens: u32, temperature: Option<f32>) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn ai_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn helplines(&self) -> &HelplineDirectory {
        &self.resources.helplines
    }

    pub fn assess_risk(&self, text: &str) -> RiskLevel {
        self.detector.assess_risk(text)
    }

    /// Full reply pipeline: crisis screening, then AI, then rule-based fallback.
    ///
    /// Crisis-tier messages never reach the AI provider.
    pub async fn generate(&self, text: &str, name: &str) -> ResponsePayload {
        let level = self.assess_risk(text);

        if !level.is_crisis() {
            return match self.call_ai(text, name, PromptStyle::Companion).await {
                Ok(reply) => ResponsePayload::plain(reply),
                Err(e) => {
                    tracing::warn!(error = %e, kind = e.kind(), "Using fallback reply");
                    ResponsePayload::plain(self.fallback(text, name))
                }
            };
        }

        let (message, show_resources) = match level {
            RiskLevel::HighRisk => (
                format!(
                    "{}{}",
                    pick(&self.resources.comfort.crisis_immediate),
                    HIGH_RISK_SUFFIX
                ),
                true,
            ),
            RiskLevel::MediumRisk => (
                format!(
                    "{}{}",
                    pick(&self.resources.comfort.crisis_support),
                    MEDIUM_RISK_SUFFIX
                ),
                true,
            ),
            RiskLevel::LowRisk | RiskLevel::NoRisk => (LOW_RISK_REPLY.to_string(), false),
        };

        ResponsePayload {
            message,
            crisis_level: level.into(),
            show_resources,
        }
    }

    /// `/chat` behaviour: straight to the AI with the conversational prompt,
    /// or through `generate` when `screen` is set.
    pub async fn chat(&self, text: &str, name: &str, screen: bool) -> ResponsePayload {
        if screen {
            return self.generate(text, name).await;
        }

        match self.call_ai(text, name, PromptStyle::Conversational).await {
            Ok(reply) => ResponsePayload::plain(reply),
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Chat AI call failed");
                ResponsePayload::plain(CHAT_FALLBACK_REPLY)
            }
        }
    }

    /// One attempt at the AI provider. Any failure, including "not configured",
    /// comes back as `AiServiceUnavailable`.
    pub async fn call_ai(
        &self,
        text: &str,
        name: &str,
        style: PromptStyle,
    ) -> Result<String, CompanionError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            CompanionError::AiServiceUnavailable("no API key configured".to_string())
        })?;

        let request = ProviderRequest::new(style.build(text, name))
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = provider
            .send_message(&request)
            .await
            .map_err(CompanionError::ai_unavailable)?;

        tracing::debug!(
            provider = %response.provider,
            model = %response.model,
            finish_reason = ?response.finish_reason,
            "AI reply received"
        );
        Ok(response.text)
    }

    pub fn fallback(&self, text: &str, name: &str) -> String {
        fallback_response(&self.resources.support, text, name)
    }

    /// Answer a quick-comfort button by its key
    pub fn quick_comfort(&self, kind: &str) -> Result<String, CompanionError> {
        let kind: ComfortKind = kind.parse()?;
        Ok(comfort::comfort_message(&self.resources, kind))
    }

    /// Personalised greeting for a newly named session
    pub fn welcome(&self, name: &str) -> String {
        let template = pick(&self.resources.welcome_templates);
        format!("{}{}", template.replace("{name}", name.trim()), WELCOME_SUFFIX)
    }
}

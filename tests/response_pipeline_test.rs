// Response pipeline tests
//
// Verifies that:
// 1. Crisis-tier messages never reach the AI provider
// 2. The provider receives the companion prompt with name and message
// 3. Provider failures fall through to the rule-based replies

use anyhow::Result;
use safespace::companion::{Companion, CrisisLevel, ResponsePayload};
use safespace::providers::{LlmProvider, ProviderRequest, ProviderResponse};
use safespace::resources::Resources;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock provider that records every prompt it receives
#[derive(Clone)]
struct MockProvider {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    fn new(reply: Option<&str>) -> Self {
        Self {
            reply: reply.map(str::to_string),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for MockProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        self.prompts.lock().await.push(request.prompt.clone());

        match &self.reply {
            Some(text) => Ok(ProviderResponse {
                text: text.clone(),
                model: self.default_model().to_string(),
                finish_reason: Some("STOP".to_string()),
                provider: "mock".to_string(),
            }),
            None => anyhow::bail!("Mock provider failed"),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }
}

fn companion(provider: &MockProvider) -> Companion {
    Companion::new(Resources::default(), Some(Box::new(provider.clone()))).unwrap()
}

#[tokio::test]
async fn test_crisis_messages_skip_the_provider() -> Result<()> {
    let provider = MockProvider::new(Some("should not be used"));
    let companion = companion(&provider);

    let cases = [
        ("I have a suicide plan", CrisisLevel::High, true),
        ("KHUDKUSHI", CrisisLevel::High, true),
        ("I might overdose", CrisisLevel::Medium, true),
        ("I feel empty inside", CrisisLevel::Low, false),
    ];

    for (text, level, show_resources) in cases {
        let payload = companion.generate(text, "Riya").await;
        assert_eq!(payload.crisis_level, level, "wrong tier for {:?}", text);
        assert_eq!(payload.show_resources, show_resources);
    }

    assert!(provider.prompts.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_provider_receives_companion_prompt() -> Result<()> {
    let provider = MockProvider::new(Some("It sounds like today was a lot. 💙"));
    let companion = companion(&provider);

    let payload = companion.generate("Work was exhausting today", "Asha").await;
    assert_eq!(payload, ResponsePayload::plain("It sounds like today was a lot. 💙"));

    let prompts = provider.prompts.lock().await;
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("SafeSpace Companion"));
    assert!(prompts[0].contains("The user's name is Asha."));
    assert!(prompts[0].contains("\"Work was exhausting today\""));
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_falls_back_to_rules() -> Result<()> {
    let provider = MockProvider::new(None);
    let companion = companion(&provider);

    let greeting = companion.generate("hi", "Asha").await;
    assert!(greeting.message.contains("Asha"));
    assert_eq!(greeting.crisis_level, CrisisLevel::None);

    let thanks = companion.generate("thanks so much", "").await;
    assert_eq!(
        thanks.message,
        "Thank you for sharing that with me. It's an honor to be here with you. 💝"
    );

    assert_eq!(provider.prompts.lock().await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_chat_uses_conversational_prompt() -> Result<()> {
    let provider = MockProvider::new(Some("Glad you're here."));
    let companion = companion(&provider);

    let payload = companion.chat("Just checking in", "Friend", false).await;
    assert_eq!(payload.message, "Glad you're here.");

    let prompts = provider.prompts.lock().await;
    assert!(prompts[0].contains("emotionally intelligent AI friend"));
    assert!(prompts[0].contains("The user's name is Friend."));
    Ok(())
}

// Provider factory
//
// Creates the LLM provider from configuration

use anyhow::Result;

use super::gemini::GeminiProvider;
use super::LlmProvider;
use crate::config::GeminiSettings;

/// Create the Gemini provider, or `None` when no API key is configured.
///
/// A missing key disables the AI path; it is not an error.
pub fn create_provider(settings: &GeminiSettings) -> Result<Option<Box<dyn LlmProvider>>> {
    if settings.api_key().is_none() {
        tracing::warn!("{}", crate::errors::api_key_missing_notice());
        return Ok(None);
    }

    let provider = GeminiProvider::new(settings)?;
    tracing::info!(
        provider = provider.name(),
        model = provider.default_model(),
        timeout_secs = settings.timeout_secs,
        "AI provider configured"
    );

    Ok(Some(Box::new(provider)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_disables_provider() {
        let provider = create_provider(&GeminiSettings::default()).unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_create_gemini_provider() {
        let settings = GeminiSettings {
            api_key: Some("test-key".to_string()),
            model: "gemini-1.5-flash".to_string(),
            ..GeminiSettings::default()
        };

        let provider = create_provider(&settings).unwrap().unwrap();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.default_model(), "gemini-1.5-flash");
    }
}

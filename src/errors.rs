// Error types for the companion
//
// Internal code returns these explicitly. The HTTP layer logs them and
// answers with a supportive message instead of an error status.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompanionError {
    /// Missing credential, transport failure, timeout or unusable reply
    #[error("AI service unavailable: {0}")]
    AiServiceUnavailable(String),

    /// Quick-comfort request named a category we don't have
    #[error("Unknown comfort category: '{0}'")]
    UnknownComfortCategory(String),

    #[error("Maximum session limit reached ({active}/{max})")]
    SessionLimit { active: usize, max: usize },

    /// A resource table failed validation at load time
    #[error("Invalid resource tables: {0}")]
    InvalidResources(String),
}

impl CompanionError {
    /// Wrap any provider failure, keeping the full cause chain in the message
    pub fn ai_unavailable(err: impl Into<anyhow::Error>) -> Self {
        Self::AiServiceUnavailable(format!("{:#}", err.into()))
    }

    /// Short machine-friendly tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AiServiceUnavailable(_) => "ai_service_unavailable",
            Self::UnknownComfortCategory(_) => "unknown_comfort_category",
            Self::SessionLimit { .. } => "session_limit",
            Self::InvalidResources(_) => "invalid_resources",
        }
    }
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &str, error: &str) -> String {
    format!(
        "Failed to parse config file {}\n\n\
        Error: {}\n\n\
        Try:\n\
        1. Check config file syntax:\n\
           cat {}\n\n\
        2. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Unclosed brackets []\n\
           • Unknown section names",
        path, error, path
    )
}

/// Startup notice when no Gemini key is configured
pub fn api_key_missing_notice() -> &'static str {
    "GEMINI_API_KEY is not set; AI replies are disabled and the built-in \
     supportive responses will be used instead. Set it in the environment, \
     a .env file, or [gemini] api_key in ~/.safespace/config.toml"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_unavailable_keeps_context_chain() {
        let err = anyhow::anyhow!("connection refused").context("Failed to send request to Gemini API");
        let wrapped = CompanionError::ai_unavailable(err);
        let msg = wrapped.to_string();
        assert!(msg.contains("Failed to send request"));
        assert!(msg.contains("connection refused"));
        assert_eq!(wrapped.kind(), "ai_service_unavailable");
    }

    #[test]
    fn test_unknown_category_names_the_key() {
        let err = CompanionError::UnknownComfortCategory("joy".to_string());
        assert!(err.to_string().contains("'joy'"));
    }

    #[test]
    fn test_config_parse_error_mentions_path() {
        let msg = config_parse_error("/tmp/config.toml", "expected `=`");
        assert!(msg.contains("/tmp/config.toml"));
        assert!(msg.contains("expected `=`"));
    }
}

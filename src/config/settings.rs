// Configuration structs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini API settings
    pub gemini: GeminiSettings,

    /// HTTP server settings
    pub server: ServerConfig,

    /// `/chat` endpoint behaviour
    pub chat: ChatSettings,

    /// Optional JSON file replacing the built-in resource tables
    pub resources_path: Option<PathBuf>,
}

impl Config {
    /// True when a non-empty Gemini key is configured
    pub fn ai_enabled(&self) -> bool {
        self.gemini.api_key().is_some()
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: Option<String>,

    /// Model name (default: gemini-2.5-flash)
    pub model: String,

    /// API root, overridable for proxies and tests
    pub base_url: String,

    /// Per-request timeout; expiry counts as an AI failure
    pub timeout_secs: u64,

    pub max_output_tokens: u32,

    pub temperature: Option<f32>,
}

impl GeminiSettings {
    /// The configured key, treating blank strings as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: 10,
            max_output_tokens: 512,
            temperature: None,
        }
    }
}

// Keep the key out of logs
impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:5000")
    pub bind_address: String,
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
    /// Session timeout in minutes
    pub session_timeout_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            max_sessions: 1000,
            session_timeout_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Run `/chat` messages through crisis screening before the AI call.
    /// Off by default: `/chat` goes straight to the AI.
    pub screen_messages: bool,
}

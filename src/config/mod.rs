// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{default_config_path, load_config};
pub use settings::{
    ChatSettings, Config, GeminiSettings, ServerConfig, DEFAULT_GEMINI_BASE_URL,
    DEFAULT_GEMINI_MODEL,
};

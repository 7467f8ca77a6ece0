// Configuration loader
// Reads ~/.safespace/config.toml (or an explicit path), then applies
// environment overrides. A missing Gemini key is not an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::config_parse_error;

/// Load configuration from a config file (if any) and the environment
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    // .env in the working directory is optional
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => match default_config_path() {
            Some(default_path) if default_path.exists() => load_from_file(&default_path)?,
            _ => Config::default(),
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if let Some(resources_path) = &config.resources_path {
        if !resources_path.exists() {
            anyhow::bail!("Resources file not found: {}", resources_path.display());
        }
    }

    Ok(config)
}

/// ~/.safespace/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".safespace").join("config.toml"))
}

fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!(config_parse_error(&path.display().to_string(), &e.to_string())))?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Environment wins over the config file
fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
        config.gemini.api_key = Some(api_key);
    }
    if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.trim().is_empty()) {
        config.gemini.model = model;
    }
    if let Some(bind) = lookup("SAFESPACE_BIND").filter(|b| !b.trim().is_empty()) {
        config.server.bind_address = bind;
    }
    if let Some(path) = lookup("SAFESPACE_RESOURCES").filter(|p| !p.trim().is_empty()) {
        config.resources_path = Some(PathBuf::from(path));
    }
}

//! Core TOML config loading: read from path or platform default.

use crate::schema::ChatbotConfig;
use chatbot_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Range checks are left to [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<ChatbotConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ChatbotConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/chatbot/config.toml`
/// On Linux: `~/.config/chatbot/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ChatbotConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Load `path`, or write the template there and return defaults when it
/// is missing. A template that cannot be written only costs a warning.
pub(crate) fn load_or_create(path: &Path) -> Result<ChatbotConfig, ConfigError> {
    if path.exists() {
        return load_from_path(path);
    }

    info!("no config found at {}, creating default", path.display());
    if let Err(e) = create_default_config(path) {
        warn!("{e}; continuing with built-in defaults");
    }
    Ok(ChatbotConfig::default())
}

//! Deployment secrets store.
//!
//! `secrets.toml` is a flat table of string values, e.g.
//!
//! ```toml
//! GEMINI_API_KEY = "..."
//! YOUTUBE_API_KEY = "..."
//! ```
//!
//! Non-string values are ignored. A missing file is an empty store.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chatbot_common::ConfigError;
use tracing::{debug, info};

use crate::toml_loader::default_secrets_path;

#[derive(Clone, Default)]
pub struct SecretsStore {
    values: HashMap<String, String>,
}

impl fmt::Debug for SecretsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("SecretsStore")
            .field("keys", &keys)
            .finish()
    }
}

impl SecretsStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse secrets from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse secrets: {e}")))?;

        let mut values = HashMap::new();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    values.insert(key, s);
                }
                _ => debug!(key = %key, "ignoring non-string secret"),
            }
        }
        Ok(Self { values })
    }

    /// Load secrets from `path`. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no secrets file at {}", path.display());
            return Ok(Self::empty());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;
        let store = Self::from_toml_str(&content)?;
        info!(count = store.len(), "loaded secrets from {}", path.display());
        Ok(store)
    }

    /// Load secrets from the platform default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&default_secrets_path()?)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

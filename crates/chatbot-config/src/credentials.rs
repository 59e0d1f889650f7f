//! Credential resolution over layered configuration sources.
//!
//! Layers are consulted in order and the first non-blank value wins. The
//! standard order is the secrets store, then the process environment.
//! Nothing is cached: every `resolve` call re-reads the layers.

use std::collections::HashMap;
use std::fmt;

use chatbot_common::AbsentCredential;
use tracing::debug;

use crate::secrets::SecretsStore;

/// Credential name for the generative model backend.
pub const MODEL_API_KEY: &str = "GEMINI_API_KEY";
/// Credential name for the video search backend.
pub const SEARCH_API_KEY: &str = "YOUTUBE_API_KEY";

/// One source of named secret values.
pub trait SecretLayer: Send + Sync {
    /// Short label used in log output.
    fn label(&self) -> &'static str;

    fn get(&self, name: &str) -> Option<String>;
}

impl SecretLayer for SecretsStore {
    fn label(&self) -> &'static str {
        "secrets"
    }

    fn get(&self, name: &str) -> Option<String> {
        SecretsStore::get(self, name).map(str::to_string)
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SecretLayer for ProcessEnv {
    fn label(&self) -> &'static str {
        "env"
    }

    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl SecretLayer for HashMap<String, String> {
    fn label(&self) -> &'static str {
        "map"
    }

    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// A named credential and the value resolved for it, if any.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub name: String,
    pub value: Option<String>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("value", &self.value.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Credential {
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_result(self) -> Result<String, AbsentCredential> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(AbsentCredential::new(self.name)),
        }
    }
}

pub struct CredentialResolver {
    layers: Vec<Box<dyn SecretLayer>>,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Secrets store first, then the process environment.
    pub fn standard(secrets: SecretsStore) -> Self {
        Self::new().with_layer(secrets).with_layer(ProcessEnv)
    }

    pub fn with_layer(mut self, layer: impl SecretLayer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Look up `name` across all layers. Blank values count as absent.
    pub fn lookup(&self, name: &str) -> Credential {
        let value = self.layers.iter().find_map(|layer| {
            let value = layer.get(name).filter(|v| !v.trim().is_empty())?;
            debug!(credential = name, layer = layer.label(), "credential resolved");
            Some(value)
        });

        if value.is_none() {
            debug!(credential = name, "credential absent from all layers");
        }

        Credential {
            name: name.to_string(),
            value,
        }
    }

    pub fn resolve(&self, name: &str) -> Result<String, AbsentCredential> {
        self.lookup(name).into_result()
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

//! Generative model backend configuration.

use serde::{Deserialize, Serialize};

/// Whether prior turns are replayed to the model on every request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryConfig {
    #[default]
    Replay,
    Fresh,
}

/// Model backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub base_url: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Nucleus sampling threshold (valid range: 0.0-1.0).
    pub top_p: f64,
    /// Candidate tokens considered per step (valid range: 1-1000).
    pub top_k: u32,
    /// Hard cap on generated length (valid range: 1-8192).
    pub max_output_tokens: u32,
    /// Request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    pub history: HistoryConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-flash".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            temperature: 0.7,
            top_p: 0.95,
            top_k: 50,
            max_output_tokens: 1000,
            timeout_secs: 120,
            history: HistoryConfig::Replay,
        }
    }
}

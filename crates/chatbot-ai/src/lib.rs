//! Conversation engine for the chatbot.
//!
//! Provides:
//! - `Session`: the append-only transcript of one conversation
//! - `GeminiClient`: the generative model backend
//! - `YouTubeClient` and `CourseCatalog`: recommendation lookups
//! - `TurnPipeline`: dispatches each user turn and normalizes the results

pub mod error;
pub mod gemini;
pub mod lookup;
pub mod pipeline;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::{ClientInitError, LookupError, ModelError};
pub use gemini::{GeminiClient, GeminiConfig};
pub use lookup::{CourseCatalog, LookupClient, LookupResult, Platform, YouTubeClient, YouTubeConfig};
pub use pipeline::{HistoryMode, TurnOutcome, TurnPipeline, FIXED_APOLOGY};
pub use session::Session;

/// A generative-text backend.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Generate a reply to `prompt`.
    ///
    /// `history` holds the turns that precede the prompt, oldest first. The
    /// prompt itself is not part of it.
    async fn generate(&self, prompt: &str, history: &[Turn]) -> Result<GeneratedText, ModelError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Trimmed model output plus the token usage the backend reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

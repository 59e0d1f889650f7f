//! Gemini API client struct, request building, and response parsing.

use crate::error::check_base_url;
use crate::{ClientInitError, GeneratedText, ModelError, Role, TokenUsage, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client. Rejects keys that cannot be sent as a header value
    /// and base URLs that do not parse.
    pub fn new(config: GeminiConfig) -> Result<Self, ClientInitError> {
        validate_api_key(&config.api_key)?;
        check_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientInitError::Http(e.to_string()))?;

        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body: prior turns, then the prompt as the
    /// final user turn.
    pub(crate) fn build_request_body(&self, prompt: &str, history: &[Turn]) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();

        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": prompt }]
        }));

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": self.config.temperature,
                "topP": self.config.top_p,
                "topK": self.config.top_k,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        })
    }

    /// Parse a Gemini response into trimmed text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<GeneratedText, ModelError> {
        let candidates = match json["candidates"].as_array() {
            Some(candidates) => candidates,
            None => {
                if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                    return Err(ModelError::Blocked(reason.to_string()));
                }
                return Err(ModelError::Parse("no candidates in response".to_string()));
            }
        };

        let first = candidates
            .first()
            .ok_or_else(|| ModelError::Parse("empty candidates".to_string()))?;

        let mut content = String::new();
        if let Some(parts) = first["content"]["parts"].as_array() {
            for part in parts {
                if let Some(text) = part["text"].as_str() {
                    content.push_str(text);
                }
            }
        }

        let text = content.trim();
        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(GeneratedText {
            text: text.to_string(),
            usage,
        })
    }
}

fn validate_api_key(key: &str) -> Result<(), ClientInitError> {
    if key.is_empty() {
        return Err(ClientInitError::InvalidApiKey("key is empty".into()));
    }
    if !key.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ClientInitError::InvalidApiKey(
            "key must be printable ASCII without whitespace".into(),
        ));
    }
    Ok(())
}

//! ModelClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{GeneratedText, ModelClient, ModelError, Turn};

use super::client::GeminiClient;

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str, history: &[Turn]) -> Result<GeneratedText, ModelError> {
        let body = self.build_request_body(prompt, history);
        let url = self.api_url();

        debug!(model = %self.config.model, history = history.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        let generated = self.parse_response(json)?;
        debug!(
            input_tokens = generated.usage.input_tokens,
            output_tokens = generated.usage.output_tokens,
            "Gemini API response"
        );
        Ok(generated)
    }
}

//! Groq chat-completion paraphrase client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::parser::extract_variants;
use crate::errors::PipelineError;

const GROQ_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Per-call timeout for paraphrase requests.
const PARAPHRASE_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_PERSONA: &str = "You are a helpful AI that paraphrases text naturally and clearly.";

/// Seam for paraphrase providers, mirroring [`super::Summarizer`].
#[async_trait]
pub trait Paraphraser: Send + Sync {
    /// Produces up to `variant_count` paraphrased renditions of `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the provider responds with
    /// a non-2xx status, or the response lacks the expected message content.
    async fn paraphrase(
        &self,
        text: &str,
        variant_count: usize,
    ) -> Result<Vec<String>, PipelineError>;
}

/// Paraphrase client for the Groq OpenAI-compatible chat-completion endpoint.
pub struct GroqParaphraser {
    api_key: String,
    model: String,
}

impl GroqParaphraser {
    #[must_use]
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_prompt(text: &str, variant_count: usize) -> String {
        format!(
            "Paraphrase the following text in natural English. \
             Provide {variant_count} unique variations as numbered points (1., 2., etc.):\n\n{text}"
        )
    }
}

#[async_trait]
impl Paraphraser for GroqParaphraser {
    async fn paraphrase(
        &self,
        text: &str,
        variant_count: usize,
    ) -> Result<Vec<String>, PipelineError> {
        info!(model = %self.model, variant_count, "Requesting paraphrases from Groq");

        let request_body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PERSONA },
                { "role": "user", "content": Self::build_prompt(text, variant_count) }
            ],
            "temperature": 0.9,
            "max_tokens": 600
        });

        let client = Client::builder()
            .timeout(PARAPHRASE_TIMEOUT)
            .build()
            .map_err(|e| PipelineError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        let response = client
            .post(GROQ_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PipelineError::HttpError(format!("Groq API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(PipelineError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            PipelineError::ProviderError(format!("Failed to parse Groq response: {e}"))
        })?;

        let content = response_json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                PipelineError::ProviderError("No message content in response".to_string())
            })?;

        debug!(reply_chars = content.len(), "Groq reply received");

        Ok(extract_variants(content, variant_count))
    }
}

//! Hugging Face Inference API summarization clients.
//!
//! Both the extractive and the abstractive capability are served by the same
//! wrapper; they differ only in which model endpoint they point at.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::core::models::SummaryLength;
use crate::errors::PipelineError;

const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Per-call timeout for summarization requests.
const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(60);

/// Seam for summarization providers, so the pipeline can be exercised with
/// test doubles in place of live HTTP clients.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the provider responds with
    /// a non-2xx status, or the response body does not carry a summary.
    async fn summarize(&self, text: &str, length: SummaryLength)
    -> Result<String, PipelineError>;
}

/// Summarization client for one Hugging Face model endpoint.
pub struct HfSummarizer {
    api_key: String,
    model: String,
}

impl HfSummarizer {
    #[must_use]
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Summarizer for HfSummarizer {
    async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, PipelineError> {
        let (min_length, max_length) = length.token_bounds();
        info!(
            model = %self.model,
            min_length,
            max_length,
            "Requesting summary from Hugging Face"
        );

        let request_body = json!({
            "inputs": text,
            "parameters": {
                "min_length": min_length,
                "max_length": max_length,
            }
        });

        let client = Client::builder()
            .timeout(SUMMARIZE_TIMEOUT)
            .build()
            .map_err(|e| PipelineError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        let response = client
            .post(format!("{HF_INFERENCE_BASE}/{}", self.model))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                PipelineError::HttpError(format!("Hugging Face API request failed: {e}"))
            })?;

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
            PipelineError::ProviderError(format!("Failed to parse Hugging Face response: {e}"))
        })?;

        debug!(model = %self.model, "Hugging Face response received");

        // Summarization endpoints answer with [{"summary_text": "..."}]
        response_json
            .get(0)
            .and_then(|entry| entry.get("summary_text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                PipelineError::ProviderError("No summary_text in response".to_string())
            })
    }
}

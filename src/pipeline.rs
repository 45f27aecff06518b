//! Orchestration layer: owns the three capability handles and dispatches
//! summarize/paraphrase requests to the right one.
//!
//! Each capability is constructed independently; a missing credential records
//! the capability as absent instead of failing pipeline construction. Every
//! provider error is absorbed here and converted into a [`PipelineReply`], so
//! callers never see a raw error cross this boundary.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::ai::paraphrase::{GroqParaphraser, Paraphraser};
use crate::ai::summarizer::{HfSummarizer, Summarizer};
use crate::core::config::AppConfig;
use crate::core::models::{PipelineReply, SummaryLength, SummaryMethod};

/// Default number of paraphrase variants requested.
pub const DEFAULT_VARIANT_COUNT: usize = 3;

/// Handle to one remote capability.
///
/// Present holds a working client; Absent records why construction failed.
/// Handles are built once and read-only afterwards.
pub enum Capability<T> {
    Present(T),
    Absent(String),
}

impl<T> Capability<T> {
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Capability::Present(_))
    }
}

/// Combined pipeline for summarization (Hugging Face) and paraphrasing (Groq).
pub struct Pipeline {
    extractive: Capability<Box<dyn Summarizer>>,
    abstractive: Capability<Box<dyn Summarizer>>,
    paraphraser: Capability<Box<dyn Paraphraser>>,
}

impl Pipeline {
    /// Builds the pipeline from configuration, constructing each capability
    /// inside its own failure scope. Never fails as a whole: each capability
    /// that cannot be built is recorded as absent and logged, and the other
    /// two are unaffected.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let extractive = match config.hf_credential() {
            Ok(key) => {
                info!(model = config.extractive_model(), "Extractive summarizer ready");
                Capability::Present(Box::new(HfSummarizer::new(
                    key.to_string(),
                    config.extractive_model().to_string(),
                )) as Box<dyn Summarizer>)
            }
            Err(e) => {
                warn!(error = %e, "Extractive summarizer unavailable");
                Capability::Absent(e.to_string())
            }
        };

        let abstractive = match config.hf_credential() {
            Ok(key) => {
                info!(model = config.abstractive_model(), "Abstractive summarizer ready");
                Capability::Present(Box::new(HfSummarizer::new(
                    key.to_string(),
                    config.abstractive_model().to_string(),
                )) as Box<dyn Summarizer>)
            }
            Err(e) => {
                warn!(error = %e, "Abstractive summarizer unavailable");
                Capability::Absent(e.to_string())
            }
        };

        let paraphraser = match config.groq_credential() {
            Ok(key) => {
                info!(model = config.paraphrase_model(), "Paraphraser ready");
                Capability::Present(Box::new(GroqParaphraser::new(
                    key.to_string(),
                    config.paraphrase_model().to_string(),
                )) as Box<dyn Paraphraser>)
            }
            Err(e) => {
                warn!(error = %e, "Paraphraser unavailable");
                Capability::Absent(e.to_string())
            }
        };

        Self {
            extractive,
            abstractive,
            paraphraser,
        }
    }

    /// Builds a pipeline from explicit capability handles. Intended for tests
    /// injecting provider doubles.
    #[must_use]
    pub fn with_capabilities(
        extractive: Capability<Box<dyn Summarizer>>,
        abstractive: Capability<Box<dyn Summarizer>>,
        paraphraser: Capability<Box<dyn Paraphraser>>,
    ) -> Self {
        Self {
            extractive,
            abstractive,
            paraphraser,
        }
    }

    /// Summarizes `text` with the capability selected by `method`.
    ///
    /// Blank input returns a warning before any capability is consulted. An
    /// absent capability or a failing remote call returns a failure; a
    /// successful provider response is passed through unvalidated.
    pub async fn summarize(
        &self,
        text: &str,
        method: SummaryMethod,
        length: SummaryLength,
    ) -> PipelineReply {
        if text.trim().is_empty() {
            return PipelineReply::Warning("No text provided.".to_string());
        }

        let capability = match method {
            SummaryMethod::Extractive => &self.extractive,
            SummaryMethod::Abstractive => &self.abstractive,
        };

        let summarizer = match capability {
            Capability::Present(client) => client,
            Capability::Absent(reason) => {
                warn!(capability = method.capability_name(), %reason, "Dispatch to absent capability");
                return PipelineReply::Failure(format!(
                    "{} unavailable.",
                    method.capability_name()
                ));
            }
        };

        match summarizer.summarize(text, length).await {
            Ok(summary) => PipelineReply::Success(summary),
            Err(e) => {
                warn!(capability = method.capability_name(), error = %e, "Summarization failed");
                PipelineReply::Failure(format!("Error: {e}"))
            }
        }
    }

    /// Generates paraphrase variants of `text` and joins them with blank
    /// lines. An empty variant list (the model produced nothing parseable)
    /// joins to an empty success, not a failure.
    pub async fn paraphrase(&self, text: &str, variant_count: usize) -> PipelineReply {
        if text.trim().is_empty() {
            return PipelineReply::Warning("No text provided.".to_string());
        }

        let paraphraser = match &self.paraphraser {
            Capability::Present(client) => client,
            Capability::Absent(reason) => {
                warn!(capability = "Paraphraser", %reason, "Dispatch to absent capability");
                return PipelineReply::Failure("Paraphraser unavailable.".to_string());
            }
        };

        match paraphraser.paraphrase(text, variant_count).await {
            Ok(variants) => PipelineReply::Success(variants.join("\n\n")),
            Err(e) => {
                warn!(capability = "Paraphraser", error = %e, "Paraphrasing failed");
                PipelineReply::Failure(format!("Error in paraphrasing: {e}"))
            }
        }
    }

    /// Reports which capabilities are present. Pure; repeated calls return
    /// the same mapping unless the pipeline is rebuilt.
    #[must_use]
    pub fn status(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("extractive", self.extractive.is_present()),
            ("abstractive", self.abstractive.is_present()),
            ("paraphraser", self.paraphraser.is_present()),
        ])
    }
}

use async_trait::async_trait;

use textmorph::ai::paraphrase::Paraphraser;
use textmorph::ai::parser::VARIANTS_HEADER;
use textmorph::ai::summarizer::Summarizer;
use textmorph::core::config::AppConfig;
use textmorph::core::models::{PipelineReply, SummaryLength, SummaryMethod};
use textmorph::errors::PipelineError;
use textmorph::pipeline::{Capability, Pipeline};

/// Summarizer double that returns a fixed reply.
struct FixedSummarizer(&'static str);

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _length: SummaryLength,
    ) -> Result<String, PipelineError> {
        Ok(self.0.to_string())
    }
}

/// Summarizer double that panics if it is ever consulted.
struct UnreachableSummarizer;

#[async_trait]
impl Summarizer for UnreachableSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _length: SummaryLength,
    ) -> Result<String, PipelineError> {
        panic!("Summarizer must not be called for this input");
    }
}

/// Summarizer double that always fails with a provider error.
struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _length: SummaryLength,
    ) -> Result<String, PipelineError> {
        Err(PipelineError::ApiError {
            status: 503,
            body: "model loading".to_string(),
        })
    }
}

/// Paraphraser double that parses a canned model reply through the real
/// extraction heuristic.
struct CannedParaphraser(&'static str);

#[async_trait]
impl Paraphraser for CannedParaphraser {
    async fn paraphrase(
        &self,
        _text: &str,
        variant_count: usize,
    ) -> Result<Vec<String>, PipelineError> {
        Ok(textmorph::ai::parser::extract_variants(self.0, variant_count))
    }
}

/// Paraphraser double that panics if it is ever consulted.
struct UnreachableParaphraser;

#[async_trait]
impl Paraphraser for UnreachableParaphraser {
    async fn paraphrase(
        &self,
        _text: &str,
        _variant_count: usize,
    ) -> Result<Vec<String>, PipelineError> {
        panic!("Paraphraser must not be called for this input");
    }
}

fn all_present_pipeline() -> Pipeline {
    Pipeline::with_capabilities(
        Capability::Present(Box::new(FixedSummarizer("The cat sat."))),
        Capability::Present(Box::new(FixedSummarizer("A cat was seated."))),
        Capability::Present(Box::new(CannedParaphraser(
            "1. Hi world\n2. Greetings world",
        ))),
    )
}

fn all_absent_pipeline() -> Pipeline {
    Pipeline::with_capabilities(
        Capability::Absent("HF_API_KEY not set".to_string()),
        Capability::Absent("HF_API_KEY not set".to_string()),
        Capability::Absent("GROQ_API_KEY not set".to_string()),
    )
}

#[tokio::test]
async fn test_construction_without_credentials_degrades_to_absent() {
    // Missing credentials must not abort construction; each capability
    // records its configuration error and the operations report it.
    let pipeline = Pipeline::new(&AppConfig::default());

    let status = pipeline.status();
    assert_eq!(status.get("extractive"), Some(&false));
    assert_eq!(status.get("abstractive"), Some(&false));
    assert_eq!(status.get("paraphraser"), Some(&false));

    let reply = pipeline
        .summarize("Some text", SummaryMethod::Extractive, SummaryLength::Short)
        .await;
    assert_eq!(
        reply,
        PipelineReply::Failure("Extractive Summarizer unavailable.".to_string())
    );
}

#[tokio::test]
async fn test_blank_text_short_circuits_summarize() {
    // The panicking doubles prove no capability is consulted for blank input.
    let pipeline = Pipeline::with_capabilities(
        Capability::Present(Box::new(UnreachableSummarizer)),
        Capability::Present(Box::new(UnreachableSummarizer)),
        Capability::Present(Box::new(UnreachableParaphraser)),
    );

    for input in ["", "   ", "\t\n  \n"] {
        let reply = pipeline
            .summarize(input, SummaryMethod::Extractive, SummaryLength::Short)
            .await;
        assert_eq!(
            reply,
            PipelineReply::Warning("No text provided.".to_string()),
            "Blank input {input:?} should warn without a provider call"
        );
    }
}

#[tokio::test]
async fn test_blank_text_short_circuits_paraphrase() {
    let pipeline = Pipeline::with_capabilities(
        Capability::Present(Box::new(UnreachableSummarizer)),
        Capability::Present(Box::new(UnreachableSummarizer)),
        Capability::Present(Box::new(UnreachableParaphraser)),
    );

    let reply = pipeline.paraphrase("   \n ", 3).await;
    assert_eq!(reply, PipelineReply::Warning("No text provided.".to_string()));
}

#[tokio::test]
async fn test_absent_capabilities_fail_with_capability_name() {
    let pipeline = all_absent_pipeline();

    let reply = pipeline
        .summarize("Some text", SummaryMethod::Extractive, SummaryLength::Medium)
        .await;
    assert_eq!(
        reply,
        PipelineReply::Failure("Extractive Summarizer unavailable.".to_string())
    );

    let reply = pipeline
        .summarize("Some text", SummaryMethod::Abstractive, SummaryLength::Medium)
        .await;
    assert_eq!(
        reply,
        PipelineReply::Failure("Abstractive Summarizer unavailable.".to_string())
    );

    let reply = pipeline.paraphrase("Some text", 3).await;
    assert_eq!(
        reply,
        PipelineReply::Failure("Paraphraser unavailable.".to_string())
    );
}

#[tokio::test]
async fn test_summarize_passes_provider_text_through_verbatim() {
    let pipeline = all_present_pipeline();

    let reply = pipeline
        .summarize("The cat sat.", SummaryMethod::Extractive, SummaryLength::Short)
        .await;

    assert_eq!(reply, PipelineReply::Success("The cat sat.".to_string()));
    // The rendered success carries no marker prefix.
    assert_eq!(reply.render(), "The cat sat.");
}

#[tokio::test]
async fn test_summarize_dispatches_by_method() {
    let pipeline = all_present_pipeline();

    let reply = pipeline
        .summarize("The cat sat.", SummaryMethod::Abstractive, SummaryLength::Long)
        .await;

    assert_eq!(reply, PipelineReply::Success("A cat was seated.".to_string()));
}

#[tokio::test]
async fn test_provider_error_becomes_failure_reply() {
    let pipeline = Pipeline::with_capabilities(
        Capability::Present(Box::new(FailingSummarizer)),
        Capability::Present(Box::new(FailingSummarizer)),
        Capability::Present(Box::new(UnreachableParaphraser)),
    );

    let reply = pipeline
        .summarize("Some text", SummaryMethod::Extractive, SummaryLength::Medium)
        .await;

    match reply {
        PipelineReply::Failure(message) => {
            assert!(
                message.contains("503"),
                "Failure should carry the provider status: {message}"
            );
            assert!(message.contains("model loading"));
        }
        other => panic!("Expected a failure reply, got {other:?}"),
    }
}

#[tokio::test]
async fn test_paraphrase_joins_variants_with_blank_lines() {
    let pipeline = all_present_pipeline();

    let reply = pipeline.paraphrase("Hello world", 2).await;

    let expected = format!("{VARIANTS_HEADER}\n\n1. Hi world\n\n2. Greetings world");
    assert_eq!(reply, PipelineReply::Success(expected));
}

#[tokio::test]
async fn test_paraphrase_with_unparseable_reply_is_empty_success() {
    let pipeline = Pipeline::with_capabilities(
        Capability::Absent("unused".to_string()),
        Capability::Absent("unused".to_string()),
        Capability::Present(Box::new(CannedParaphraser("   \n  "))),
    );

    let reply = pipeline.paraphrase("Hello world", 3).await;

    assert_eq!(
        reply,
        PipelineReply::Success(String::new()),
        "No parseable content is not an error by itself"
    );
}

#[tokio::test]
async fn test_status_reports_each_capability_independently() {
    let pipeline = Pipeline::with_capabilities(
        Capability::Absent("HF_API_KEY not set".to_string()),
        Capability::Absent("HF_API_KEY not set".to_string()),
        Capability::Present(Box::new(CannedParaphraser("1. x"))),
    );

    let status = pipeline.status();
    assert_eq!(status.get("extractive"), Some(&false));
    assert_eq!(status.get("abstractive"), Some(&false));
    assert_eq!(status.get("paraphraser"), Some(&true));
}

#[tokio::test]
async fn test_status_is_idempotent_across_operations() {
    let pipeline = all_present_pipeline();

    let before = pipeline.status();
    let _ = pipeline
        .summarize("Text", SummaryMethod::Extractive, SummaryLength::Short)
        .await;
    let _ = pipeline.paraphrase("Text", 2).await;
    let after = pipeline.status();

    assert_eq!(before, after, "Operations must not change capability status");
}

/// textmorph - a text summarization and paraphrasing pipeline backed by remote
/// inference APIs.
///
/// The crate orchestrates three independent remote capabilities:
/// 1. An extractive summarizer (Hugging Face Inference API)
/// 2. An abstractive summarizer (Hugging Face Inference API)
/// 3. A paraphrase generator (Groq chat-completion API)
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the HTTP provider calls
/// - serde_json for request/response shaping
/// - Tokio for the async runtime
/// - tracing for structured logging
///
/// Each capability is constructed independently at startup; one capability
/// failing to initialize (for example a missing credential) never prevents the
/// others from working. Every provider failure is absorbed at the pipeline
/// boundary and surfaced as a [`core::models::PipelineReply`] instead of an
/// error crossing into the caller.
///
/// # Example
///
/// ```no_run
/// use textmorph::core::config::AppConfig;
/// use textmorph::core::models::{SummaryLength, SummaryMethod};
/// use textmorph::pipeline::Pipeline;
///
/// #[tokio::main]
/// async fn main() {
///     textmorph::setup_logging();
///
///     let config = AppConfig::from_env();
///     let pipeline = Pipeline::new(&config);
///
///     let reply = pipeline
///         .summarize(
///             "The quick brown fox jumps over the lazy dog.",
///             SummaryMethod::Abstractive,
///             SummaryLength::Short,
///         )
///         .await;
///
///     println!("{}", reply.render());
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod pipeline;

/// Configure structured logging for terminal use.
///
/// Sets up tracing-subscriber with a compact formatter and an `RUST_LOG`-driven
/// env filter (defaulting to `info`). Safe to call more than once; repeated
/// initialization is swallowed by `try_init`.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your binary
/// textmorph::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().compact().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

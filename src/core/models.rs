use std::io;
use std::path::Path;

/// Marker glyph prepended to warnings at the presentation edge.
pub const WARNING_MARKER: &str = "⚠️";

/// Marker glyph prepended to failures at the presentation edge.
pub const FAILURE_MARKER: &str = "❌";

/// File name a saved summary result is written under.
pub const SUMMARY_FILENAME: &str = "summary.txt";

/// File name a saved paraphrase result is written under.
pub const PARAPHRASE_FILENAME: &str = "paraphrase.txt";

/// Which summarization capability a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMethod {
    Extractive,
    Abstractive,
}

impl SummaryMethod {
    /// Parses a user-supplied method name, case-insensitively.
    /// Anything unrecognized falls back to abstractive.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "extractive" => SummaryMethod::Extractive,
            _ => SummaryMethod::Abstractive,
        }
    }

    #[must_use]
    pub fn capability_name(self) -> &'static str {
        match self {
            SummaryMethod::Extractive => "Extractive Summarizer",
            SummaryMethod::Abstractive => "Abstractive Summarizer",
        }
    }
}

/// Requested summary length hint, mapped to token bounds for the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    /// Parses a user-supplied length name, case-insensitively.
    /// Anything unrecognized falls back to medium.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "short" => SummaryLength::Short,
            "long" => SummaryLength::Long,
            _ => SummaryLength::Medium,
        }
    }

    /// (min, max) output token bounds sent to the summarization endpoint.
    #[must_use]
    pub fn token_bounds(self) -> (u32, u32) {
        match self {
            SummaryLength::Short => (10, 60),
            SummaryLength::Medium => (40, 140),
            SummaryLength::Long => (100, 300),
        }
    }
}

/// Outcome of one pipeline operation.
///
/// The original surface encoded success, warning, and failure into a single
/// string sniffed for a leading marker glyph. Here the distinction is a proper
/// tagged type at the pipeline boundary; the glyphs are applied only when
/// rendering for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineReply {
    /// The operation produced output text.
    Success(String),
    /// A user-fixable input problem; no remote capability was contacted.
    Warning(String),
    /// A capability was unavailable or a remote call failed.
    Failure(String),
}

impl PipelineReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineReply::Success(_))
    }

    /// The payload text without any display marker.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            PipelineReply::Success(s) | PipelineReply::Warning(s) | PipelineReply::Failure(s) => s,
        }
    }

    /// Renders the reply for display, applying the marker glyphs warnings and
    /// failures carry on the user-facing surface.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            PipelineReply::Success(text) => text.clone(),
            PipelineReply::Warning(message) => format!("{WARNING_MARKER} {message}"),
            PipelineReply::Failure(message) => format!("{FAILURE_MARKER} {message}"),
        }
    }

    /// Persists the payload to `path`. Only a success is written; warnings and
    /// failures never touch the filesystem. Returns whether a file was
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if the write itself fails.
    pub fn save(&self, path: &Path) -> io::Result<bool> {
        match self {
            PipelineReply::Success(text) => {
                std::fs::write(path, text)?;
                Ok(true)
            }
            PipelineReply::Warning(_) | PipelineReply::Failure(_) => Ok(false),
        }
    }
}

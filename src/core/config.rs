use std::env;

use crate::errors::PipelineError;

/// Default Hugging Face model used for abstractive summarization.
pub const DEFAULT_ABSTRACTIVE_MODEL: &str = "facebook/bart-large-cnn";

/// Default Hugging Face model used for extractive summarization.
pub const DEFAULT_EXTRACTIVE_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// Default Groq model used for paraphrasing.
pub const DEFAULT_PARAPHRASE_MODEL: &str = "llama-3.1-8b-instant";

/// Process-boundary configuration, read from the environment.
///
/// Both credentials are optional at load time: a missing key makes the
/// capabilities that need it initialize as absent, with the pipeline itself
/// still constructible and partially usable.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub hf_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub extractive_model: Option<String>,
    pub abstractive_model: Option<String>,
    pub paraphrase_model: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            hf_api_key: env::var("HF_API_KEY").ok().filter(|v| !v.trim().is_empty()),
            groq_api_key: env::var("GROQ_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            extractive_model: env::var("TEXTMORPH_EXTRACTIVE_MODEL").ok(),
            abstractive_model: env::var("TEXTMORPH_ABSTRACTIVE_MODEL").ok(),
            paraphrase_model: env::var("TEXTMORPH_PARAPHRASE_MODEL").ok(),
        }
    }

    /// The Hugging Face credential, if configured.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the missing variable.
    pub fn hf_credential(&self) -> Result<&str, PipelineError> {
        self.hf_api_key
            .as_deref()
            .ok_or_else(|| PipelineError::ConfigError("HF_API_KEY not set".to_string()))
    }

    /// The Groq credential, if configured.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the missing variable.
    pub fn groq_credential(&self) -> Result<&str, PipelineError> {
        self.groq_api_key
            .as_deref()
            .ok_or_else(|| PipelineError::ConfigError("GROQ_API_KEY not set".to_string()))
    }

    #[must_use]
    pub fn extractive_model(&self) -> &str {
        self.extractive_model
            .as_deref()
            .unwrap_or(DEFAULT_EXTRACTIVE_MODEL)
    }

    #[must_use]
    pub fn abstractive_model(&self) -> &str {
        self.abstractive_model
            .as_deref()
            .unwrap_or(DEFAULT_ABSTRACTIVE_MODEL)
    }

    #[must_use]
    pub fn paraphrase_model(&self) -> &str {
        self.paraphrase_model
            .as_deref()
            .unwrap_or(DEFAULT_PARAPHRASE_MODEL)
    }
}

//! All AI/LLM provider functionality

pub mod paraphrase;
pub mod parser;
pub mod summarizer;

// Re-export main types for convenience
pub use paraphrase::{GroqParaphraser, Paraphraser};
pub use parser::extract_variants;
pub use summarizer::{HfSummarizer, Summarizer};

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use textmorph::core::config::AppConfig;
use textmorph::core::models::{
    PARAPHRASE_FILENAME, PipelineReply, SUMMARY_FILENAME, SummaryLength, SummaryMethod,
};
use textmorph::pipeline::{DEFAULT_VARIANT_COUNT, Pipeline};

#[derive(Debug, Clone, ValueEnum)]
enum Method {
    Extractive,
    Abstractive,
}

impl From<Method> for SummaryMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Extractive => SummaryMethod::Extractive,
            Method::Abstractive => SummaryMethod::Abstractive,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum Length {
    Short,
    Medium,
    Long,
}

impl From<Length> for SummaryLength {
    fn from(length: Length) -> Self {
        match length {
            Length::Short => SummaryLength::Short,
            Length::Medium => SummaryLength::Medium,
            Length::Long => SummaryLength::Long,
        }
    }
}

#[derive(Parser)]
#[command(name = "textmorph", version, about = "Text summarization and paraphrasing via remote inference APIs.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize text
    Summarize {
        /// Text to summarize (falls back to --file, then stdin)
        text: Option<String>,

        /// Read the input text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Summarization method
        #[arg(short, long, value_enum, default_value_t = Method::Abstractive)]
        method: Method,

        /// Summary length
        #[arg(short, long, value_enum, default_value_t = Length::Medium)]
        length: Length,

        /// Save the result to summary.txt
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Generate paraphrased variants of text
    Paraphrase {
        /// Text to paraphrase (falls back to --file, then stdin)
        text: Option<String>,

        /// Read the input text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Number of variants to request
        #[arg(short, long, default_value_t = DEFAULT_VARIANT_COUNT)]
        variants: usize,

        /// Save the result to paraphrase.txt
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Show which capabilities are available
    Status,
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Prints the rendered reply and optionally persists a success to `filename`.
/// Returns whether the operation succeeded.
fn deliver(reply: &PipelineReply, save_to: Option<&str>) -> anyhow::Result<bool> {
    println!("{}", reply.render());

    if let Some(filename) = save_to {
        let written = reply
            .save(Path::new(filename))
            .with_context(|| format!("Failed to write {filename}"))?;
        if written {
            eprintln!("Saved to {filename}");
        }
    }

    Ok(reply.is_success() || matches!(reply, PipelineReply::Warning(_)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    textmorph::setup_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let pipeline = Pipeline::new(&config);

    let ok = match cli.command {
        Command::Summarize {
            text,
            file,
            method,
            length,
            save,
        } => {
            let input = read_input(text, file)?;
            let reply = pipeline
                .summarize(&input, method.into(), length.into())
                .await;
            deliver(&reply, save.then_some(SUMMARY_FILENAME))?
        }
        Command::Paraphrase {
            text,
            file,
            variants,
            save,
        } => {
            let input = read_input(text, file)?;
            let reply = pipeline.paraphrase(&input, variants).await;
            deliver(&reply, save.then_some(PARAPHRASE_FILENAME))?
        }
        Command::Status => {
            for (name, present) in pipeline.status() {
                println!("{name}: {}", if present { "available" } else { "unavailable" });
            }
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

//! repunct CLI: ingest → chunk → annotate → render.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use repunct::{
    AnnotatorSettings, HttpAnnotator, MarkdownRenderer, Renderer, RepunctError, RunConfig,
    TextRenderer, build_chunks, ingest, process_chunks,
};

/// Re-punctuate an unpunctuated document via a remote completion service.
#[derive(Debug, Parser)]
#[command(name = "repunct", version, about)]
struct Cli {
    /// Input document (.pdf is text-extracted, anything else is read as text)
    input: PathBuf,

    /// Write indented plain text to this file
    #[arg(long, value_name = "FILE")]
    txt_out: Option<PathBuf>,

    /// Write Markdown to this file
    #[arg(long, value_name = "FILE")]
    md_out: Option<PathBuf>,

    /// Maximum chunk length in chars
    #[arg(long, default_value_t = 10_000)]
    chunk_size: usize,

    /// Annotation attempts per chunk before falling back to the original text
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,

    /// Pause between annotation calls, in seconds
    #[arg(long, default_value_t = 5)]
    delay: u64,

    /// Model identifier for the completion service
    #[arg(long, env = "ARK_MODEL")]
    model: String,

    /// Chat-completions endpoint URL
    #[arg(long, env = "ARK_ENDPOINT", default_value = AnnotatorSettings::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// API key for the completion service
    #[arg(long, env = "ARK_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), RepunctError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = RunConfig::default()
        .with_chunk_size(cli.chunk_size)
        .with_max_attempts(cli.max_attempts)
        .with_inter_call_delay(Duration::from_secs(cli.delay));
    config.validate()?;

    let paragraphs = ingest::extract_paragraphs(&cli.input)?;
    info!(paragraphs = paragraphs.len(), input = %cli.input.display(), "input extracted");

    let chunks = build_chunks(&paragraphs, config.chunk_size);
    info!(chunks = chunks.len(), "chunks built");

    let annotator = HttpAnnotator::new(AnnotatorSettings {
        endpoint: cli.endpoint,
        api_key: cli.api_key,
        model: cli.model,
    })?;

    let processed =
        process_chunks(&chunks, &annotator, config.retry, config.inter_call_delay).await?;

    let fallbacks: Vec<usize> = processed
        .iter()
        .enumerate()
        .filter(|(_, chunk)| chunk.is_fallback())
        .map(|(index, _)| index + 1)
        .collect();
    if !fallbacks.is_empty() {
        warn!(chunks = ?fallbacks, "chunks kept their original text after exhausted retries");
    }

    if let Some(path) = &cli.txt_out {
        tokio::fs::write(path, TextRenderer.render(&processed)).await?;
        info!(path = %path.display(), "plain text written");
    }
    if let Some(path) = &cli.md_out {
        tokio::fs::write(path, MarkdownRenderer.render(&processed)).await?;
        info!(path = %path.display(), "markdown written");
    }
    if cli.txt_out.is_none() && cli.md_out.is_none() {
        println!("{}", TextRenderer.render(&processed));
    }

    info!(
        paragraphs = paragraphs.len(),
        chunks = chunks.len(),
        fallbacks = fallbacks.len(),
        "run complete"
    );
    Ok(())
}

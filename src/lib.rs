//! # Repunct: boundary-safe chunking and re-punctuation pipeline
//!
//! Repunct takes an unpunctuated document (typically text extracted from a
//! PDF), splits it into bounded-size chunks along sentence and clause
//! boundaries, sends each chunk to a remote completion service that inserts
//! punctuation, and renders the results into output documents.
//!
//! ## Core pieces
//!
//! - [`chunking`]: greedy paragraph packing plus boundary-safe splitting of
//!   oversized paragraphs (`。` first, `；` second, hard cut last).
//! - [`pipeline`]: strictly sequential chunk processing with bounded retry,
//!   exponential backoff, inter-call pacing, and fallback to the original
//!   text when retries run out. Output stays aligned 1:1 with input.
//! - [`annotator`]: the [`Annotator`] seam and an HTTP chat-completions
//!   implementation.
//! - [`ingest`] and [`render`]: thin glue at both ends, paragraph
//!   extraction going in, text/Markdown rendering coming out.
//!
//! ## Quick start
//!
//! ```no_run
//! use repunct::{
//!     AnnotatorSettings, HttpAnnotator, RunConfig, build_chunks, ingest,
//!     process_chunks,
//! };
//!
//! # async fn run() -> Result<(), repunct::RepunctError> {
//! let config = RunConfig::default().with_chunk_size(10_000);
//! config.validate()?;
//!
//! let paragraphs = ingest::extract_paragraphs("scan.pdf".as_ref())?;
//! let chunks = build_chunks(&paragraphs, config.chunk_size);
//!
//! let annotator = HttpAnnotator::new(AnnotatorSettings {
//!     endpoint: AnnotatorSettings::DEFAULT_ENDPOINT.to_string(),
//!     api_key: "key".to_string(),
//!     model: "doubao-seed-1.6".to_string(),
//! })?;
//!
//! let processed =
//!     process_chunks(&chunks, &annotator, config.retry, config.inter_call_delay).await?;
//! assert_eq!(processed.len(), chunks.len());
//! # Ok(())
//! # }
//! ```

pub mod annotator;
pub mod chunking;
pub mod config;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod render;

pub use annotator::{AnnotateError, Annotator, HttpAnnotator};
pub use chunking::{build_chunks, split_oversized};
pub use config::{AnnotatorSettings, RunConfig};
pub use error::RepunctError;
pub use pipeline::{
    ChunkOutcome, ProcessedChunk, RetryPolicy, process_chunks, retry_with_backoff,
};
pub use render::{MarkdownRenderer, Renderer, TextRenderer};

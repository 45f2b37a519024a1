//! Sequential chunk pipeline: retry, fallback-on-exhaustion, pacing.
//!
//! Chunks are driven through the annotator strictly in order; a chunk is
//! fully resolved (annotated or degraded to its original text) before the
//! next one starts. The only suspension points are the annotation call
//! itself and the timed pauses, so output ordering needs no synchronization.

mod retry;

pub use retry::{Retryable, RetryError, RetryPolicy, retry_with_backoff};

use std::time::Duration;

use tracing::{info, warn};

use crate::annotator::{AnnotateError, Annotator};

/// One chunk's result: the annotator's rewrite, or the original text when
/// retries ran out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedChunk {
    pub text: String,
    pub outcome: ChunkOutcome,
}

impl ProcessedChunk {
    pub fn is_fallback(&self) -> bool {
        self.outcome == ChunkOutcome::Fallback
    }
}

/// Terminal state of a chunk's trip through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// The annotation call succeeded (possibly after retries).
    Annotated,
    /// Retries were exhausted; the chunk kept its original text.
    Fallback,
}

/// Annotates `chunks` one at a time, producing output aligned 1:1 with the
/// input.
///
/// Each chunk runs under [`retry_with_backoff`]. Exhausted retries degrade
/// the chunk to [`ChunkOutcome::Fallback`] and the run continues; a
/// non-retryable annotator error aborts the run. After every chunk,
/// fallback included, the pipeline pauses for `inter_call_delay` to pace
/// the external service.
pub async fn process_chunks<A>(
    chunks: &[String],
    annotator: &A,
    retry: RetryPolicy,
    inter_call_delay: Duration,
) -> Result<Vec<ProcessedChunk>, AnnotateError>
where
    A: Annotator + ?Sized,
{
    let total = chunks.len();
    let mut processed = Vec::with_capacity(total);

    for (index, chunk) in chunks.iter().enumerate() {
        info!(
            chunk = index + 1,
            total,
            chars = chunk.chars().count(),
            "annotating chunk"
        );

        match retry_with_backoff(retry, || annotator.annotate(chunk)).await {
            Ok(text) => {
                processed.push(ProcessedChunk {
                    text,
                    outcome: ChunkOutcome::Annotated,
                });
            }
            Err(RetryError::Exhausted { attempts, source }) => {
                warn!(
                    chunk = index + 1,
                    attempts,
                    error = %source,
                    "retries exhausted, keeping original chunk text"
                );
                processed.push(ProcessedChunk {
                    text: chunk.clone(),
                    outcome: ChunkOutcome::Fallback,
                });
            }
            Err(RetryError::Fatal(error)) => return Err(error),
        }

        tokio::time::sleep(inter_call_delay).await;
    }

    debug_assert_eq!(processed.len(), total);
    Ok(processed)
}

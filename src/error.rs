//! Crate-level error taxonomy.
//!
//! Fatal errors that should abort a run are surfaced through [`RepunctError`].
//! Recoverable annotation failures are handled inside the pipeline (retry,
//! then fallback) and never reach this type; see
//! [`AnnotateError`](crate::annotator::AnnotateError) for that taxonomy.

use thiserror::Error;

use crate::annotator::AnnotateError;

/// Errors that abort a repunct run.
#[derive(Debug, Error)]
pub enum RepunctError {
    /// Invalid run configuration, rejected before any processing begins.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input document could not be read or decoded.
    #[error("failed to extract text from input: {0}")]
    Ingest(String),

    /// A non-retryable annotator failure propagated out of the pipeline.
    #[error(transparent)]
    Annotate(#[from] AnnotateError),

    /// Filesystem error while reading input or writing rendered output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! The annotation seam: a trait for services that rewrite text with
//! punctuation inserted, and the error taxonomy the retry policy keys on.

mod http;

pub use http::HttpAnnotator;

use async_trait::async_trait;
use thiserror::Error;

use crate::pipeline::Retryable;

/// A remote (or scripted) service that returns a punctuated rewrite of
/// `text` with the same information content.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<String, AnnotateError>;
}

/// Failures of a single annotation call.
///
/// Transport and service-level failures are transient by convention and
/// retried; a response the client cannot interpret is not, since resending
/// the same request would yield the same malformed answer.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Network-level failure before a response was obtained.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {message}")]
    Service { status: u16, message: String },

    /// The response parsed but carried no usable completion text.
    #[error("completion response carried no content")]
    EmptyCompletion,
}

impl Retryable for AnnotateError {
    fn is_retryable(&self) -> bool {
        match self {
            AnnotateError::Transport(_) | AnnotateError::Service { .. } => true,
            AnnotateError::EmptyCompletion => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_are_retryable() {
        let error = AnnotateError::Service {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(error.is_retryable());
    }

    #[test]
    fn empty_completion_is_not_retryable() {
        assert!(!AnnotateError::EmptyCompletion.is_retryable());
    }
}

//! Run configuration for the chunking and annotation pipeline.

use std::time::Duration;

use crate::error::RepunctError;
use crate::pipeline::RetryPolicy;

/// Tunable knobs for one repunct run.
///
/// Defaults mirror what the external completion service tolerates well:
/// 10k-char chunks, three attempts with 4s–10s exponential backoff, and a
/// five second pause between calls.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Maximum chunk length in chars (Unicode scalar values).
    pub chunk_size: usize,
    /// Retry policy applied to each chunk's annotation call.
    pub retry: RetryPolicy,
    /// Unconditional pause after each chunk resolves, before the next begins.
    pub inter_call_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            chunk_size: 10_000,
            retry: RetryPolicy::default(),
            inter_call_delay: Duration::from_secs(5),
        }
    }
}

impl RunConfig {
    /// Rejects configurations that cannot produce a valid run.
    ///
    /// Called before any chunk is built or processed, so a bad configuration
    /// never does partial work.
    pub fn validate(&self) -> Result<(), RepunctError> {
        if self.chunk_size == 0 {
            return Err(RepunctError::Config(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(RepunctError::Config(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.retry.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_inter_call_delay(mut self, delay: Duration) -> Self {
        self.inter_call_delay = delay;
        self
    }
}

/// Connection settings for the remote completion service.
#[derive(Clone, Debug)]
pub struct AnnotatorSettings {
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Bearer token for the service.
    pub api_key: String,
    /// Model identifier passed in each request.
    pub model: String,
}

impl AnnotatorSettings {
    /// Ark v3 chat-completions endpoint, the service this tool was built for.
    pub const DEFAULT_ENDPOINT: &'static str =
        "https://ark.cn-beijing.volces.com/api/v3/chat/completions";
}

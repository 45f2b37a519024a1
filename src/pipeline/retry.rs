//! Retry-with-backoff wrapper, kept independent of the pipeline that uses it.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Errors that can tell the retry loop whether another attempt makes sense.
pub trait Retryable {
    /// `true` for transient failures worth retrying, `false` for failures
    /// that no amount of retrying will fix.
    fn is_retryable(&self) -> bool;
}

/// Bounds for the exponential backoff between attempts.
///
/// The first retry waits `backoff_min`; each subsequent retry doubles the
/// wait, capped at `backoff_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (must be at least 1).
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub backoff_min: Duration,
    /// Ceiling on the doubled delay.
    pub backoff_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_min: Duration::from_secs(4),
            backoff_max: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Backoff before the retry that follows attempt number `attempt`.
    fn delay_after(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(1).min(30);
        self.backoff_min
            .saturating_mul(1u32 << doublings)
            .min(self.backoff_max)
    }
}

/// Terminal outcome of a retried operation that never succeeded.
#[derive(Debug, Error)]
pub enum RetryError<E>
where
    E: std::error::Error + 'static,
{
    /// Every allowed attempt failed with a retryable error.
    #[error("retries exhausted after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: E,
    },

    /// A non-retryable error ended the loop immediately.
    #[error(transparent)]
    Fatal(E),
}

/// Drives `operation` until it succeeds, fails fatally, or runs out of
/// attempts, sleeping the policy's backoff between attempts.
///
/// Only errors reporting [`Retryable::is_retryable`] are retried; anything
/// else surfaces as [`RetryError::Fatal`] without further attempts.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    E: Retryable + std::error::Error + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if !error.is_retryable() => return Err(RetryError::Fatal(error)),
            Err(error) if attempt >= policy.max_attempts => {
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    source: error,
                });
            }
            Err(error) => {
                let delay = policy.delay_after(attempt);
                debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "transient failure, backing off before retry"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

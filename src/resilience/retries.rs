//! Retry logic.
//!
//! # Responsibilities
//! - Run an operation up to `max_attempts` times
//! - Retry only errors the caller's predicate accepts
//! - Wait a fixed backoff between attempts through a [`Sleeper`]
//!
//! # Design Decisions
//! - A non-retryable error stops immediately
//! - The final attempt's failure is returned without waiting

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::config::RetryConfig;
use crate::resilience::sleep::Sleeper;

/// Bounded retry with a fixed delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Treated as at least 1.
    pub max_attempts: u32,
    /// Delay before each retry.
    pub backoff: Duration,
}

/// Why a retried operation ultimately failed.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// The operation returned an error the predicate does not retry.
    #[error("failed on attempt {attempt}: {error}")]
    Fatal { attempt: u32, error: E },

    /// Every attempt failed with a retryable error.
    #[error("gave up after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: E },
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    /// Run `op` under this policy.
    ///
    /// `op` receives the 1-based attempt number. `is_retryable` decides
    /// whether an error is worth another attempt.
    pub async fn run<T, E, S, Op, Fut, P>(
        &self,
        sleeper: &S,
        mut op: Op,
        is_retryable: P,
    ) -> Result<T, RetryError<E>>
    where
        S: Sleeper + ?Sized,
        Op: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) if !is_retryable(&error) => {
                    return Err(RetryError::Fatal { attempt, error });
                }
                Err(last_error) if attempt >= max_attempts => {
                    return Err(RetryError::Exhausted {
                        attempts: attempt,
                        last_error,
                    });
                }
                Err(error) => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        backoff_ms = self.backoff.as_millis() as u64,
                        error = %error,
                        "Retryable failure, waiting before next attempt"
                    );
                    sleeper.sleep(self.backoff).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.backoff_ms))
    }
}

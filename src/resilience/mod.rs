//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Transaction submission:
//!     → retries.rs (bounded attempts, retryable-error predicate)
//!     → sleep.rs (fixed backoff between attempts, injectable for tests)
//! ```
//!
//! # Design Decisions
//! - Only errors the caller marks retryable are retried
//! - Fixed backoff; the node tells us when its pool is full, not how long
//! - No wait after the final attempt

pub mod retries;
pub mod sleep;

pub use retries::{RetryError, RetryPolicy};
pub use sleep::{Sleeper, TokioSleeper};

//! Key material loading.
//!
//! # Responsibilities
//! - Read private keys from a flat text file, one per line
//! - Keep secrets out of logs and debug output
//!
//! # Design Decisions
//! - No key format validation here; a malformed key surfaces when its
//!   wallet is derived, and only that wallet is affected
//! - An unreadable or empty file yields no credentials rather than an error;
//!   the caller decides whether that is fatal

pub mod credential;
pub mod store;

pub use credential::Credential;
pub use store::KeyStore;

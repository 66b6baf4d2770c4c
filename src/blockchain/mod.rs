//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Key file credentials
//!     → wallet.rs (address derivation, signing)
//!     → transaction.rs (assemble transfer request)
//!     → client.rs (RPC connection with timeouts, broadcast)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts
//! - The sweep only sees the [`ChainClient`] capability

pub mod chain;
pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use chain::ChainClient;
pub use client::BlockchainClient;
pub use transaction::{build_transfer, TransferParams, TRANSFER_GAS_LIMIT};
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::Wallet;

//! Chain-specific types and error definitions.

use thiserror::Error;

/// Substring a node puts in its error message when its pending pool is full.
pub const MEMPOOL_FULL_MESSAGE: &str = "mempool is full";

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Clone, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node refused the transaction because its mempool is full.
    #[error("Node congested: {0}")]
    MempoolFull(String),

    /// The node rejected the transaction for any other reason.
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction could not be assembled or signed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

impl BlockchainError {
    /// Classify a node's submission error message.
    pub fn from_submission(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(MEMPOOL_FULL_MESSAGE) {
            Self::MempoolFull(message)
        } else {
            Self::Rejected(message)
        }
    }

    /// True for the transient congestion rejection.
    pub fn is_mempool_full(&self) -> bool {
        matches!(self, Self::MempoolFull(_))
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

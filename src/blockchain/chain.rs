//! The chain capability the sweep depends on.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::blockchain::types::BlockchainResult;
use crate::blockchain::wallet::Wallet;

/// Narrow view of an EVM node: exactly what a sweep needs and nothing more.
///
/// [`BlockchainClient`](crate::blockchain::BlockchainClient) is the
/// production implementation; tests substitute a scripted double.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Native-token balance in wei.
    async fn get_balance(&self, address: Address) -> BlockchainResult<U256>;

    /// Transaction count including transactions still in the mempool.
    async fn get_pending_nonce(&self, address: Address) -> BlockchainResult<u64>;

    /// Current network gas price in wei.
    async fn get_gas_price(&self) -> BlockchainResult<u128>;

    /// Sign `request` with `wallet`. Signing is local, so the default
    /// delegates straight to the wallet.
    async fn sign_transaction(
        &self,
        wallet: &Wallet,
        request: TransactionRequest,
    ) -> BlockchainResult<Bytes> {
        wallet.sign_transaction(request).await
    }

    /// Broadcast an already-signed transaction.
    async fn send_raw_transaction(&self, raw: &Bytes) -> BlockchainResult<TxHash>;
}

//! Transaction assembly for native-token transfers.
//!
//! Transfers are legacy gas-price transactions: the sweep pays exactly the
//! network gas price the node reports, with no priority fee.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;

/// Gas consumed by a plain value transfer to an externally owned account.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Everything needed to assemble one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferParams {
    pub to: Address,
    pub value: U256,
    /// Pending-inclusive nonce of the sender.
    pub nonce: u64,
    pub gas_limit: u64,
    /// Gas price in wei.
    pub gas_price: u128,
    pub chain_id: u64,
}

/// Build an unsigned transfer request.
pub fn build_transfer(params: TransferParams) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(params.to)
        .with_value(params.value)
        .with_nonce(params.nonce)
        .with_gas_limit(params.gas_limit)
        .with_gas_price(params.gas_price)
        .with_chain_id(params.chain_id)
}

//! Wallet management and transaction signing.
//!
//! # Security
//! - Private keys come only from the key file via [`Credential`]
//! - Keys are never logged or serialized
//! - The signer is rebuilt from the credential whenever an address is needed

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{Ethereum, EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::keystore::Credential;

/// Wallet for transaction signing.
#[derive(Debug, Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), chain_id, "Wallet derived");

        Ok(Self { signer, chain_id })
    }

    /// Derive the wallet for a loaded credential.
    pub fn from_credential(credential: &Credential, chain_id: u64) -> BlockchainResult<Self> {
        Self::from_private_key(credential.expose(), chain_id)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a transaction request and return the EIP-2718 encoded bytes
    /// ready for `eth_sendRawTransaction`.
    pub async fn sign_transaction(&self, request: TransactionRequest) -> BlockchainResult<Bytes> {
        let signer = EthereumWallet::from(self.signer.clone());
        let request = request.with_from(self.address());

        let envelope = TransactionBuilder::<Ethereum>::build(request, &signer)
            .await
            .map_err(|e| BlockchainError::Signing(format!("Signing failed: {}", e)))?;

        Ok(Bytes::from(envelope.encoded_2718()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 16600).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(wallet.chain_id(), 16600);
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let wallet = Wallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY), 1).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_wallet_from_credential() {
        let credential = Credential::new(TEST_PRIVATE_KEY);
        let wallet = Wallet::from_credential(&credential, 1).unwrap();
        assert_eq!(
            wallet.address(),
            Wallet::from_private_key(TEST_PRIVATE_KEY, 1).unwrap().address()
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = Wallet::from_private_key("invalid_key", 1);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid private key"));
    }

    #[tokio::test]
    async fn test_sign_legacy_transfer() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 16600).unwrap();
        let request = crate::blockchain::transaction::build_transfer(
            crate::blockchain::transaction::TransferParams {
                to: Address::repeat_byte(0x11),
                value: U256::from(1_000u64),
                nonce: 0,
                gas_limit: 21_000,
                gas_price: 1_000_000_000,
                chain_id: wallet.chain_id(),
            },
        );

        let raw = wallet.sign_transaction(request).await.unwrap();
        // Legacy transactions are RLP lists, which start at 0xc0 or above.
        assert!(raw[0] >= 0xc0);
    }
}

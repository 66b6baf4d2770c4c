//! Read-only balance report for every loaded wallet.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, U256};
use std::io::Write;
use thiserror::Error;

use crate::blockchain::{BlockchainError, ChainClient, Wallet};
use crate::keystore::Credential;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Chain(#[from] BlockchainError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletBalance {
    pub address: Address,
    pub balance: U256,
}

/// Prints `Wallet <address> has <amount> <symbol> tokens.` per wallet.
pub struct BalanceReporter<'a, C: ?Sized> {
    client: &'a C,
    chain_id: u64,
    token_symbol: &'a str,
}

impl<'a, C: ChainClient + ?Sized> BalanceReporter<'a, C> {
    pub fn new(client: &'a C, chain_id: u64, token_symbol: &'a str) -> Self {
        Self {
            client,
            chain_id,
            token_symbol,
        }
    }

    /// Report every credential in order.
    ///
    /// RPC failures abort the report. A malformed key is noted in the
    /// output and skipped.
    pub async fn report_all<W: Write>(
        &self,
        credentials: &[Credential],
        out: &mut W,
    ) -> Result<Vec<WalletBalance>, ReportError> {
        let mut balances = Vec::with_capacity(credentials.len());

        for (index, credential) in credentials.iter().enumerate() {
            let wallet = match Wallet::from_credential(credential, self.chain_id) {
                Ok(wallet) => wallet,
                Err(e) => {
                    tracing::warn!(key_index = index, error = %e, "Skipping unusable key");
                    writeln!(out, "Key #{} could not be used: {}", index + 1, e)?;
                    continue;
                }
            };

            let address = wallet.address();
            let balance = self.client.get_balance(address).await?;
            writeln!(
                out,
                "Wallet {} has {} {} tokens.",
                address,
                format_ether(balance),
                self.token_symbol
            )?;

            balances.push(WalletBalance { address, balance });
        }

        Ok(balances)
    }
}

//! Startup and the two user-facing operations.

use alloy::primitives::Address;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::blockchain::{BlockchainClient, BlockchainError, ChainClient};
use crate::config::{ConfigError, NetworkConfig, ValidationError};
use crate::keystore::{Credential, KeyStore};
use crate::resilience::Sleeper;
use crate::sweep::{
    BalanceReporter, ReportError, SweepRunner, SweepSettings, SweepSummary, WalletBalance,
};

/// Conditions that stop the program before any wallet is touched.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("invalid sweep settings: {0}")]
    Settings(#[from] ValidationError),

    #[error("{0}")]
    Client(#[from] BlockchainError),

    #[error("Unable to connect to the RPC endpoint {url}")]
    Unreachable { url: String },

    #[error("No wallet keys loaded from {}. Exiting.", .path.display())]
    NoKeys { path: PathBuf },

    #[error("Invalid target address '{0}'")]
    InvalidDestination(String),
}

/// Build the RPC client and make sure the node answers.
///
/// An unreachable node costs a single probe. A chain id that differs from
/// the configured one is only logged.
pub async fn connect(network: &NetworkConfig) -> Result<BlockchainClient, SetupError> {
    let client = BlockchainClient::new(network.clone())?;
    if !client.is_healthy().await {
        return Err(SetupError::Unreachable {
            url: network.rpc_url.clone(),
        });
    }

    match client.verify_chain_id().await {
        Ok(()) => tracing::info!(
            rpc_url = %network.rpc_url,
            chain_id = network.chain_id,
            "Connected to RPC endpoint"
        ),
        Err(e) => tracing::warn!(error = %e, "Chain verification failed"),
    }
    Ok(client)
}

/// Load credentials, treating an empty result as fatal.
pub fn load_credentials(store: &KeyStore) -> Result<Vec<Credential>, SetupError> {
    let credentials = store.load();
    if credentials.is_empty() {
        return Err(SetupError::NoKeys {
            path: store.path().to_path_buf(),
        });
    }
    Ok(credentials)
}

/// Loaded keys plus everything needed to report on or sweep them.
pub struct SweepApp<C, S> {
    runner: SweepRunner<C, S>,
    credentials: Vec<Credential>,
    chain_id: u64,
    token_symbol: String,
}

impl<C: ChainClient, S: Sleeper> SweepApp<C, S> {
    pub fn new(
        client: C,
        sleeper: S,
        settings: &SweepSettings,
        credentials: Vec<Credential>,
        token_symbol: impl Into<String>,
    ) -> Self {
        Self {
            runner: SweepRunner::new(client, sleeper, settings),
            credentials,
            chain_id: settings.chain_id,
            token_symbol: token_symbol.into(),
        }
    }

    /// Print the balance of every loaded wallet.
    pub async fn check_balances<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<Vec<WalletBalance>, ReportError> {
        BalanceReporter::new(self.runner.client(), self.chain_id, &self.token_symbol)
            .report_all(&self.credentials, out)
            .await
    }

    /// Sweep every wallet to `destination` and print what was sent.
    pub async fn transfer<W: Write>(
        &self,
        destination: Address,
        out: &mut W,
    ) -> io::Result<SweepSummary> {
        let mut written: io::Result<()> = Ok(());
        let summary = self
            .runner
            .run_with(&self.credentials, destination, |wallet| {
                if written.is_err() {
                    return;
                }
                if let (Some(address), Some(tx_hash)) = (wallet.address, wallet.outcome.tx_hash()) {
                    written = writeln!(out, "Transaction sent from {}. Tx hash: {}", address, tx_hash);
                }
            })
            .await;
        written?;

        writeln!(
            out,
            "Sweep complete: {} submitted, {} skipped, {} failed.",
            summary.submitted(),
            summary.skipped(),
            summary.failed()
        )?;

        Ok(summary)
    }
}

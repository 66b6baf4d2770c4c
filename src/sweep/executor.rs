//! Signing and submission of planned sweeps.
//!
//! # Responsibilities
//! - Fetch the pending nonce and gas price just before signing
//! - Sign the transfer once and submit the same bytes on every attempt
//! - Retry only when the node reports its mempool is full

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

use crate::blockchain::{build_transfer, BlockchainError, ChainClient, TransferParams, Wallet};
use crate::observability::metrics;
use crate::resilience::{RetryError, RetryPolicy, Sleeper};
use crate::sweep::planner::SweepPlan;
use crate::sweep::settings::SweepSettings;

/// Why a planned sweep was not submitted.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Nonce lookup, gas price lookup or signing failed.
    #[error("could not prepare transaction: {0}")]
    Prepare(BlockchainError),

    /// The node rejected the transaction with a non-retryable error.
    #[error("transaction error: {0}")]
    Rejected(BlockchainError),

    /// Every attempt hit a full mempool.
    #[error("transaction failed due to mempool full after {attempts} attempts")]
    Congested { attempts: u32 },
}

impl From<RetryError<BlockchainError>> for ExecuteError {
    fn from(err: RetryError<BlockchainError>) -> Self {
        match err {
            RetryError::Fatal { error, .. } => Self::Rejected(error),
            RetryError::Exhausted { attempts, .. } => Self::Congested { attempts },
        }
    }
}

/// Signs planned transfers and submits them under the retry policy.
pub struct SweepExecutor<C, S> {
    client: C,
    sleeper: S,
    chain_id: u64,
    gas_limit: u64,
    retry: RetryPolicy,
}

impl<C: ChainClient, S: Sleeper> SweepExecutor<C, S> {
    pub fn new(client: C, sleeper: S, settings: &SweepSettings) -> Self {
        Self {
            client,
            sleeper,
            chain_id: settings.chain_id,
            gas_limit: settings.gas_limit,
            retry: settings.retry,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Submit `plan` from `wallet` to `destination`.
    ///
    /// Returns the transaction hash from the first accepted submission.
    /// Failures are logged here and returned for the caller's bookkeeping.
    pub async fn execute(
        &self,
        plan: &SweepPlan,
        wallet: &Wallet,
        destination: Address,
    ) -> Result<TxHash, ExecuteError> {
        let result = self.submit(plan, wallet, destination).await;

        if let Err(e) = &result {
            tracing::error!(address = %plan.source, error = %e, "Sweep failed");
        }
        result
    }

    async fn submit(
        &self,
        plan: &SweepPlan,
        wallet: &Wallet,
        destination: Address,
    ) -> Result<TxHash, ExecuteError> {
        let nonce = self
            .client
            .get_pending_nonce(plan.source)
            .await
            .map_err(ExecuteError::Prepare)?;
        let gas_price = self
            .client
            .get_gas_price()
            .await
            .map_err(ExecuteError::Prepare)?;

        let request = build_transfer(TransferParams {
            to: destination,
            value: plan.send_amount,
            nonce,
            gas_limit: self.gas_limit,
            gas_price,
            chain_id: self.chain_id,
        });
        let raw = self
            .client
            .sign_transaction(wallet, request)
            .await
            .map_err(ExecuteError::Prepare)?;

        tracing::debug!(
            address = %plan.source,
            nonce,
            gas_price,
            value = %plan.send_amount,
            "Transfer signed"
        );

        let tx_hash = self
            .retry
            .run(
                &self.sleeper,
                |attempt| {
                    metrics::record_submit_attempt();
                    tracing::debug!(address = %plan.source, attempt, "Submitting transaction");
                    self.client.send_raw_transaction(&raw)
                },
                BlockchainError::is_mempool_full,
            )
            .await?;

        Ok(tx_hash)
    }
}

//! Sweep orchestration across all loaded wallets.
//!
//! Wallets are processed strictly in key-file order, one at a time, with a
//! fixed pause after each. A failure in one wallet never stops the run.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, TxHash};
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::{ChainClient, Wallet};
use crate::keystore::Credential;
use crate::observability::metrics;
use crate::resilience::Sleeper;
use crate::sweep::executor::SweepExecutor;
use crate::sweep::planner::{plan, PlanDecision, SkipReason};
use crate::sweep::settings::{SweepSettings, SweepThresholds};

/// What happened to one wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    Submitted(TxHash),
    Skipped(SkipReason),
    Failed(String),
}

impl SweepOutcome {
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Self::Submitted(hash) => Some(*hash),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Submitted(_) => "submitted",
            Self::Skipped(_) => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

/// Per-wallet entry in a [`SweepSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletReport {
    /// Position in the key file, 0-based.
    pub key_index: usize,
    /// `None` when the key could not be turned into a wallet.
    pub address: Option<Address>,
    pub outcome: SweepOutcome,
}

/// Results of one sweep run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub wallets: Vec<WalletReport>,
}

impl SweepSummary {
    fn count(&self, label: &str) -> usize {
        self.wallets
            .iter()
            .filter(|w| w.outcome.label() == label)
            .count()
    }

    pub fn submitted(&self) -> usize {
        self.count("submitted")
    }

    pub fn skipped(&self) -> usize {
        self.count("skipped")
    }

    pub fn failed(&self) -> usize {
        self.count("failed")
    }

    pub fn tx_hashes(&self) -> Vec<TxHash> {
        self.wallets
            .iter()
            .filter_map(|w| w.outcome.tx_hash())
            .collect()
    }
}

/// Plans and executes a sweep of every credential to one destination.
pub struct SweepRunner<C, S> {
    executor: SweepExecutor<C, S>,
    chain_id: u64,
    thresholds: SweepThresholds,
    wallet_delay: Duration,
}

impl<C: ChainClient, S: Sleeper> SweepRunner<C, S> {
    pub fn new(client: C, sleeper: S, settings: &SweepSettings) -> Self {
        Self {
            executor: SweepExecutor::new(client, sleeper, settings),
            chain_id: settings.chain_id,
            thresholds: settings.thresholds,
            wallet_delay: settings.wallet_delay,
        }
    }

    pub fn client(&self) -> &C {
        self.executor.client()
    }

    /// Sweep every credential in order, pausing after each one.
    pub async fn run(&self, credentials: &[Credential], destination: Address) -> SweepSummary {
        self.run_with(credentials, destination, |_| {}).await
    }

    /// Like [`SweepRunner::run`], handing each wallet's report to
    /// `on_wallet` as soon as it is known, before that wallet's pause.
    pub async fn run_with<F>(
        &self,
        credentials: &[Credential],
        destination: Address,
        mut on_wallet: F,
    ) -> SweepSummary
    where
        F: FnMut(&WalletReport),
    {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "sweep",
            %run_id,
            %destination,
            wallets = credentials.len()
        );

        async {
            let mut summary = SweepSummary::default();

            for (key_index, credential) in credentials.iter().enumerate() {
                let report = self.sweep_wallet(key_index, credential, destination).await;
                metrics::record_wallet_outcome(report.outcome.label());
                on_wallet(&report);
                summary.wallets.push(report);

                self.executor.sleeper().sleep(self.wallet_delay).await;
            }

            tracing::info!(
                submitted = summary.submitted(),
                skipped = summary.skipped(),
                failed = summary.failed(),
                "Sweep finished"
            );
            summary
        }
        .instrument(span)
        .await
    }

    /// Plan and, when worthwhile, execute the sweep of a single wallet.
    pub async fn sweep_wallet(
        &self,
        key_index: usize,
        credential: &Credential,
        destination: Address,
    ) -> WalletReport {
        let wallet = match Wallet::from_credential(credential, self.chain_id) {
            Ok(wallet) => wallet,
            Err(e) => {
                tracing::error!(key_index, error = %e, "Skipping unusable key");
                return WalletReport {
                    key_index,
                    address: None,
                    outcome: SweepOutcome::Failed(e.to_string()),
                };
            }
        };
        let address = wallet.address();

        let outcome = self
            .sweep_with(&wallet, destination)
            .instrument(tracing::info_span!("wallet", %address))
            .await;

        WalletReport {
            key_index,
            address: Some(address),
            outcome,
        }
    }

    async fn sweep_with(&self, wallet: &Wallet, destination: Address) -> SweepOutcome {
        let address = wallet.address();

        let balance = match self.executor.client().get_balance(address).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!(error = %e, "Balance lookup failed");
                return SweepOutcome::Failed(e.to_string());
            }
        };

        let sweep_plan = match plan(address, balance, &self.thresholds) {
            PlanDecision::Send(plan) => plan,
            PlanDecision::Skip(reason) => {
                tracing::info!(
                    balance = %format_ether(balance),
                    min_balance = %format_ether(self.thresholds.min_balance),
                    %reason,
                    "Skipping wallet"
                );
                return SweepOutcome::Skipped(reason);
            }
        };

        match self.executor.execute(&sweep_plan, wallet, destination).await {
            Ok(tx_hash) => {
                tracing::info!(
                    %tx_hash,
                    amount = %format_ether(sweep_plan.send_amount),
                    "Transaction sent"
                );
                SweepOutcome::Submitted(tx_hash)
            }
            Err(e) => SweepOutcome::Failed(e.to_string()),
        }
    }
}

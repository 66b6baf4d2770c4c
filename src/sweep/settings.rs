//! Sweep parameters in base units, derived once from configuration.

use alloy::primitives::U256;
use std::time::Duration;

use crate::config::validation::{parse_token_amount, ValidationError};
use crate::config::SweeperConfig;
use crate::resilience::RetryPolicy;

/// Balance thresholds in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepThresholds {
    /// Wallets below this are skipped. Inclusive lower bound.
    pub min_balance: U256,
    /// Left behind in every swept wallet.
    pub reserve: U256,
}

/// Everything the planner, executor and runner need, with no ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSettings {
    pub chain_id: u64,
    pub thresholds: SweepThresholds,
    pub gas_limit: u64,
    pub wallet_delay: Duration,
    pub retry: RetryPolicy,
}

impl SweepSettings {
    pub fn from_config(config: &SweeperConfig) -> Result<Self, ValidationError> {
        let thresholds = SweepThresholds {
            min_balance: parse_token_amount("sweep.min_balance", &config.sweep.min_balance)?,
            reserve: parse_token_amount("sweep.reserve_balance", &config.sweep.reserve_balance)?,
        };

        Ok(Self {
            chain_id: config.network.chain_id,
            thresholds,
            gas_limit: config.sweep.gas_limit,
            wallet_delay: Duration::from_millis(config.sweep.wallet_delay_ms),
            retry: RetryPolicy::from(&config.retry),
        })
    }
}

//! Sweep planning: decide whether and how much a wallet sends.

use alloy::primitives::{Address, U256};

use crate::sweep::settings::SweepThresholds;

/// A transfer the executor should make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPlan {
    pub source: Address,
    pub balance: U256,
    pub reserve: U256,
    pub min_threshold: U256,
    /// Always `balance - reserve`, and always non-zero.
    pub send_amount: U256,
}

/// Why a wallet was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BelowMinimumThreshold,
    InsufficientAfterReserve,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BelowMinimumThreshold => f.write_str("below minimum threshold"),
            Self::InsufficientAfterReserve => f.write_str("insufficient funds after reserve"),
        }
    }
}

/// Result of planning one wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDecision {
    Send(SweepPlan),
    Skip(SkipReason),
}

/// Plan a sweep of `balance` held by `source`.
pub fn plan(source: Address, balance: U256, thresholds: &SweepThresholds) -> PlanDecision {
    if balance < thresholds.min_balance {
        return PlanDecision::Skip(SkipReason::BelowMinimumThreshold);
    }

    match balance.checked_sub(thresholds.reserve) {
        Some(send_amount) if !send_amount.is_zero() => PlanDecision::Send(SweepPlan {
            source,
            balance,
            reserve: thresholds.reserve,
            min_threshold: thresholds.min_balance,
            send_amount,
        }),
        _ => PlanDecision::Skip(SkipReason::InsufficientAfterReserve),
    }
}

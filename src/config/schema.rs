//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the sweeper.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an absent file behaves like the stock
//! testnet setup.

use serde::{Deserialize, Serialize};

use crate::blockchain::TRANSFER_GAS_LIMIT;

/// Root configuration for the wallet sweeper.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SweeperConfig {
    /// Chain and RPC endpoint settings.
    pub network: NetworkConfig,

    /// Sweep thresholds and pacing.
    pub sweep: SweepConfig,

    /// Retry policy for congested submissions.
    pub retry: RetryConfig,

    /// Key file location.
    pub keys: KeysConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain and RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Human-readable network name for console output.
    pub name: String,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_urls: Vec<String>,

    /// Chain ID used for EIP-155 replay protection.
    pub chain_id: u64,

    /// Native token symbol used when printing balances.
    pub token_symbol: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "0g Newton Testnet".to_string(),
            rpc_url: "https://evmrpc-testnet.0g.ai/".to_string(),
            failover_urls: Vec::new(),
            chain_id: 16600,
            token_symbol: "A0GI".to_string(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Sweep thresholds, expressed in whole tokens as decimal strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Wallets holding less than this are skipped.
    pub min_balance: String,

    /// Amount left behind in every swept wallet to pay for gas.
    pub reserve_balance: String,

    /// Gas limit for a plain value transfer.
    pub gas_limit: u64,

    /// Pause between wallets in milliseconds.
    pub wallet_delay_ms: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_balance: "0.01".to_string(),
            reserve_balance: "0.005".to_string(),
            gas_limit: TRANSFER_GAS_LIMIT,
            wallet_delay_ms: 1_000,
        }
    }
}

/// Retry configuration for transaction submission.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of submission attempts (including the first).
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds.
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_ms: 5_000,
        }
    }
}

/// Key file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Path to the private key file, one key per line.
    pub path: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            path: "keys/private_keys.txt".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "wallet_sweeper=info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_testnet() {
        let config = SweeperConfig::default();
        assert_eq!(config.network.chain_id, 16600);
        assert_eq!(config.network.rpc_url, "https://evmrpc-testnet.0g.ai/");
        assert_eq!(config.sweep.min_balance, "0.01");
        assert_eq!(config.sweep.reserve_balance, "0.005");
        assert_eq!(config.sweep.gas_limit, 21_000);
        assert_eq!(config.sweep.wallet_delay_ms, 1_000);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.backoff_ms, 5_000);
        assert_eq!(config.keys.path, "keys/private_keys.txt");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SweeperConfig = toml::from_str(
            r#"
            [network]
            chain_id = 31337
            rpc_url = "http://localhost:8545"

            [retry]
            max_attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.network.chain_id, 31337);
        assert_eq!(config.network.token_symbol, "A0GI");
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.backoff_ms, 5_000);
        assert_eq!(config.sweep.min_balance, "0.01");
    }
}

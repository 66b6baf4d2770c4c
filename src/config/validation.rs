//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, attempts >= 1)
//! - Check that token amounts are well-formed decimals
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SweeperConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::utils::parse_ether;
use alloy::primitives::U256;
use thiserror::Error;

use crate::blockchain::TRANSFER_GAS_LIMIT;
use crate::config::schema::SweeperConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("network.rpc_url '{url}' is not a valid URL: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("network.chain_id must be non-zero")]
    ZeroChainId,

    #[error("network.rpc_timeout_secs must be greater than zero")]
    ZeroRpcTimeout,

    #[error("{field} '{value}' is not a valid token amount: {reason}")]
    InvalidAmount {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("sweep.gas_limit {0} is below the 21000 required for a transfer")]
    GasLimitTooLow(u64),

    #[error("retry.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("keys.path must not be empty")]
    EmptyKeyPath,
}

/// Parse a whole-token decimal string into base units (18 decimals).
pub fn parse_token_amount(field: &'static str, value: &str) -> Result<U256, ValidationError> {
    let trimmed = value.trim();
    let invalid = |reason: String| ValidationError::InvalidAmount {
        field,
        value: value.to_string(),
        reason,
    };

    if trimmed.starts_with('-') {
        return Err(invalid("amount must not be negative".to_string()));
    }

    parse_ether(trimmed).map_err(|e| invalid(e.to_string()))
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SweeperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let endpoints = std::iter::once(&config.network.rpc_url).chain(&config.network.failover_urls);
    for endpoint in endpoints {
        if let Err(e) = endpoint.parse::<url::Url>() {
            errors.push(ValidationError::InvalidRpcUrl {
                url: endpoint.clone(),
                reason: e.to_string(),
            });
        }
    }

    if config.network.chain_id == 0 {
        errors.push(ValidationError::ZeroChainId);
    }
    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRpcTimeout);
    }

    if let Err(e) = parse_token_amount("sweep.min_balance", &config.sweep.min_balance) {
        errors.push(e);
    }
    if let Err(e) = parse_token_amount("sweep.reserve_balance", &config.sweep.reserve_balance) {
        errors.push(e);
    }

    if config.sweep.gas_limit < TRANSFER_GAS_LIMIT {
        errors.push(ValidationError::GasLimitTooLow(config.sweep.gas_limit));
    }
    if config.retry.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if config.keys.path.trim().is_empty() {
        errors.push(ValidationError::EmptyKeyPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SweeperConfig::default()).is_ok());
    }

    #[test]
    fn test_parse_token_amount() {
        assert_eq!(
            parse_token_amount("x", "0.01").unwrap(),
            U256::from(10_000_000_000_000_000u64)
        );
        assert_eq!(
            parse_token_amount("x", " 0.005 ").unwrap(),
            U256::from(5_000_000_000_000_000u64)
        );
        assert!(parse_token_amount("x", "abc").is_err());
        assert!(parse_token_amount("x", "-1").is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SweeperConfig::default();
        config.network.rpc_url = "not a url".to_string();
        config.network.chain_id = 0;
        config.sweep.min_balance = "lots".to_string();
        config.retry.max_attempts = 0;
        config.sweep.gas_limit = 100;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroChainId));
        assert!(errors.contains(&ValidationError::ZeroAttempts));
        assert!(errors.contains(&ValidationError::GasLimitTooLow(100)));
    }

    #[test]
    fn test_invalid_failover_url() {
        let mut config = SweeperConfig::default();
        config.network.failover_urls.push("::bad::".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidRpcUrl { .. }));
    }
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sweeper_wallets_total` (counter): wallets processed, by outcome
//! - `sweeper_submit_attempts_total` (counter): raw transaction submissions
//! - `sweeper_rpc_health` (gauge): 1=reachable, 0=unreachable

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Start the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one processed wallet. `outcome` is `submitted`, `skipped` or `failed`.
pub fn record_wallet_outcome(outcome: &'static str) {
    metrics::counter!("sweeper_wallets_total", "outcome" => outcome).increment(1);
}

pub fn record_submit_attempt() {
    metrics::counter!("sweeper_submit_attempts_total").increment(1);
}

pub fn record_rpc_health(healthy: bool) {
    metrics::gauge!("sweeper_rpc_health").set(if healthy { 1.0 } else { 0.0 });
}

//! Native-token wallet sweeper library

pub mod blockchain;
pub mod cli;
pub mod config;
pub mod keystore;
pub mod observability;
pub mod resilience;
pub mod sweep;

pub use config::SweeperConfig;
pub use sweep::{SweepRunner, SweepSettings};

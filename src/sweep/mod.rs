//! Sweep subsystem.
//!
//! # Data Flow
//! ```text
//! SweeperConfig
//!     → settings.rs (thresholds converted to wei once)
//!
//! For each credential, in key-file order:
//!     → runner.rs (derive wallet, fetch balance)
//!     → planner.rs (skip or compute send amount)
//!     → executor.rs (nonce, gas price, sign, submit with retry)
//!     → fixed pause before the next wallet
//!
//! Read path:
//!     → reporter.rs (address + balance per wallet)
//! ```

pub mod executor;
pub mod planner;
pub mod reporter;
pub mod runner;
pub mod settings;

pub use executor::{ExecuteError, SweepExecutor};
pub use planner::{plan, PlanDecision, SkipReason, SweepPlan};
pub use reporter::{BalanceReporter, ReportError, WalletBalance};
pub use runner::{SweepOutcome, SweepRunner, SweepSummary, WalletReport};
pub use settings::{SweepSettings, SweepThresholds};

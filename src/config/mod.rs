//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SweeperConfig (validated, immutable)
//!     → SweepSettings (thresholds in base units) handed to the sweep subsystem
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    KeysConfig, NetworkConfig, ObservabilityConfig, RetryConfig, SweepConfig, SweeperConfig,
};
pub use validation::ValidationError;

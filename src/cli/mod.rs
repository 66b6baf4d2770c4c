//! Command-line front end.
//!
//! # Responsibilities
//! - Interactive menu loop (balances, transfer, continue prompt)
//! - One-shot commands for scripted use
//! - Fatal setup errors surfaced with a non-zero exit status

pub mod app;
pub mod menu;
pub mod shell;

pub use app::{SetupError, SweepApp};
pub use menu::{parse_destination, wants_another, MenuChoice};
pub use shell::{DialoguerPrompt, Prompt, Shell, ShellError};

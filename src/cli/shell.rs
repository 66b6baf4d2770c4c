//! Interactive menu loop.

use dialoguer::Input;
use std::io::{self, Write};
use thiserror::Error;

use crate::blockchain::ChainClient;
use crate::cli::app::SweepApp;
use crate::cli::menu::{parse_destination, wants_another, MenuChoice};
use crate::resilience::Sleeper;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// Source of free-text answers.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String, ShellError>;
}

/// Terminal prompt backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn ask(&mut self, question: &str) -> Result<String, ShellError> {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// The balances/transfer menu, repeated until the user declines.
pub struct Shell<'a, C, S, P> {
    app: &'a SweepApp<C, S>,
    prompt: P,
}

impl<'a, C: ChainClient, S: Sleeper, P: Prompt> Shell<'a, C, S, P> {
    pub fn new(app: &'a SweepApp<C, S>, prompt: P) -> Self {
        Self { app, prompt }
    }

    /// Run until the user answers anything but `y` to the continue prompt.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        loop {
            writeln!(out, "\nSelect an option:")?;
            writeln!(out, "1. Check Wallet Balances")?;
            writeln!(out, "2. Transfer Token")?;

            let choice = self.prompt.ask("Enter your choice (1 or 2)")?;
            match MenuChoice::parse(&choice) {
                Some(MenuChoice::CheckBalances) => {
                    writeln!(out, "\nChecking wallet balances...\n")?;
                    if let Err(e) = self.app.check_balances(out).await {
                        tracing::error!(error = %e, "Balance check failed");
                        writeln!(out, "Balance check failed: {}", e)?;
                    }
                }
                Some(MenuChoice::Transfer) => {
                    writeln!(out, "\nInitiating token transfer...\n")?;
                    let target = self.prompt.ask("Enter the target wallet address")?;
                    match parse_destination(&target) {
                        Some(destination) => {
                            self.app.transfer(destination, out).await?;
                        }
                        None => writeln!(out, "Invalid target address. Operation cancelled.")?,
                    }
                }
                None => writeln!(out, "Invalid choice. Please select a valid option.")?,
            }

            let again = self
                .prompt
                .ask("Do you want to perform another operation? (y/n)")?;
            if !wants_another(&again) {
                writeln!(out, "Exiting. Goodbye!")?;
                return Ok(());
            }
        }
    }
}

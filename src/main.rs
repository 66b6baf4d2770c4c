//! Wallet sweeper
//!
//! Moves the spare native-token balance of every wallet in a key file to a
//! single destination address on an EVM test network.
//!
//! # Architecture Overview
//!
//! ```text
//!   keys/private_keys.txt        sweeper.toml (optional)
//!            │                          │
//!            ▼                          ▼
//!      ┌──────────┐              ┌────────────┐
//!      │ keystore │              │   config   │
//!      └────┬─────┘              └─────┬──────┘
//!           │                          │
//!           ▼                          ▼
//!      ┌────────────────────────────────────┐
//!      │ cli (menu loop / one-shot command) │
//!      └───────┬──────────────────┬─────────┘
//!              │ balances         │ transfer
//!              ▼                  ▼
//!      ┌──────────────┐   ┌───────────────────────────────┐
//!      │   reporter   │   │ runner → planner → executor   │
//!      └──────┬───────┘   │            (retry on mempool  │
//!             │           │             full, 1s between  │
//!             │           │             wallets)          │
//!             │           └──────────────┬────────────────┘
//!             ▼                          ▼
//!      ┌────────────────────────────────────┐
//!      │   blockchain (alloy JSON-RPC)      │
//!      └────────────────────────────────────┘
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use wallet_sweeper::blockchain::BlockchainClient;
use wallet_sweeper::cli::app::{connect, load_credentials};
use wallet_sweeper::cli::{parse_destination, DialoguerPrompt, SetupError, Shell, SweepApp};
use wallet_sweeper::config::load_or_default;
use wallet_sweeper::keystore::KeyStore;
use wallet_sweeper::observability::{logging, metrics};
use wallet_sweeper::resilience::TokioSleeper;
use wallet_sweeper::sweep::SweepSettings;

#[derive(Parser)]
#[command(name = "wallet-sweeper")]
#[command(about = "Sweep native-token balances from many wallets into one", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the private key file, overriding the config
    #[arg(short, long)]
    keys: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the balance of every wallet and exit
    Balances,
    /// Sweep every wallet to the given address and exit
    Sweep {
        /// Destination address
        #[arg(long)]
        to: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_or_default(cli.config.as_deref()).map_err(SetupError::from)?;
    logging::init_logging(&config.observability);

    tracing::info!(
        network = %config.network.name,
        rpc_url = %config.network.rpc_url,
        chain_id = config.network.chain_id,
        "wallet-sweeper v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let settings = SweepSettings::from_config(&config).map_err(SetupError::from)?;

    let client: BlockchainClient = connect(&config.network).await?;
    println!("Connected to {}.", config.network.name);

    let key_path = cli.keys.unwrap_or_else(|| PathBuf::from(&config.keys.path));
    let credentials = load_credentials(&KeyStore::new(key_path))?;

    let app = SweepApp::new(
        client,
        TokioSleeper,
        &settings,
        credentials,
        config.network.token_symbol.clone(),
    );
    let mut stdout = std::io::stdout();

    match cli.command {
        None => {
            Shell::new(&app, DialoguerPrompt).run(&mut stdout).await?;
        }
        Some(Commands::Balances) => {
            app.check_balances(&mut stdout).await?;
        }
        Some(Commands::Sweep { to }) => {
            let destination =
                parse_destination(&to).ok_or_else(|| SetupError::InvalidDestination(to.clone()))?;
            app.transfer(destination, &mut stdout).await?;
        }
    }

    Ok(())
}

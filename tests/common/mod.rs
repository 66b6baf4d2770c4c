//! Shared doubles for integration tests.

#![allow(dead_code)]

use alloy::primitives::{keccak256, Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use wallet_sweeper::blockchain::{BlockchainError, ChainClient, Wallet};
use wallet_sweeper::keystore::Credential;
use wallet_sweeper::resilience::{RetryPolicy, Sleeper};
use wallet_sweeper::sweep::{SweepSettings, SweepThresholds};

/// Anvil's first three dev accounts.
pub const KEY_A: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const KEY_B: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const KEY_C: &str = "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";

pub const CHAIN_ID: u64 = 16600;

pub fn address_of(key: &str) -> Address {
    Wallet::from_private_key(key, CHAIN_ID).unwrap().address()
}

pub fn credentials(keys: &[&str]) -> Vec<Credential> {
    keys.iter().map(|k| Credential::new(*k)).collect()
}

pub fn eth(amount: &str) -> U256 {
    alloy::primitives::utils::parse_ether(amount).unwrap()
}

/// Thresholds 0.01 / 0.005, three attempts, 5s backoff, 1s between wallets.
pub fn settings() -> SweepSettings {
    SweepSettings {
        chain_id: CHAIN_ID,
        thresholds: SweepThresholds {
            min_balance: eth("0.01"),
            reserve: eth("0.005"),
        },
        gas_limit: 21_000,
        wallet_delay: Duration::from_secs(1),
        retry: RetryPolicy::new(3, Duration::from_secs(5)),
    }
}

/// In-memory chain with scripted submission results.
///
/// Unscripted submissions succeed with the keccak hash of the raw bytes,
/// which is the real transaction hash.
#[derive(Default)]
pub struct MockChain {
    balances: Mutex<HashMap<Address, U256>>,
    failing_balances: Mutex<Vec<Address>>,
    submissions: Mutex<VecDeque<Result<TxHash, BlockchainError>>>,
    pub sent: Mutex<Vec<Bytes>>,
    pub nonce_lookups: Mutex<Vec<Address>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(self, address: Address, balance: U256) -> Self {
        self.balances.lock().unwrap().insert(address, balance);
        self
    }

    pub fn with_failing_balance(self, address: Address) -> Self {
        self.failing_balances.lock().unwrap().push(address);
        self
    }

    pub fn with_submissions(self, script: Vec<Result<TxHash, BlockchainError>>) -> Self {
        self.submissions.lock().unwrap().extend(script);
        self
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn get_balance(&self, address: Address) -> Result<U256, BlockchainError> {
        if self.failing_balances.lock().unwrap().contains(&address) {
            return Err(BlockchainError::Timeout(10));
        }
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&address)
            .copied()
            .unwrap_or_default())
    }

    async fn get_pending_nonce(&self, address: Address) -> Result<u64, BlockchainError> {
        self.nonce_lookups.lock().unwrap().push(address);
        Ok(0)
    }

    async fn get_gas_price(&self) -> Result<u128, BlockchainError> {
        Ok(1_000_000_000)
    }

    async fn send_raw_transaction(&self, raw: &Bytes) -> Result<TxHash, BlockchainError> {
        self.sent.lock().unwrap().push(raw.clone());
        self.submissions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(keccak256(raw)))
    }
}

pub fn congested() -> Result<TxHash, BlockchainError> {
    Err(BlockchainError::from_submission(
        "server returned an error response: error code -32000: mempool is full",
    ))
}

/// Records every requested pause instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    pub waits: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Start a mock JSON-RPC node that answers every request with `body`.
///
/// The request is read in full before replying so the client never sees a
/// reset connection.
pub async fn start_mock_node(body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                read_request(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}

/// JSON-RPC error reply with the given node message.
pub fn rpc_error(code: i64, message: &str) -> String {
    format!(
        r#"{{"jsonrpc":"2.0","id":0,"error":{{"code":{},"message":"{}"}}}}"#,
        code, message
    )
}

/// JSON-RPC success reply carrying a transaction hash.
pub fn rpc_tx_hash(hash: TxHash) -> String {
    format!(r#"{{"jsonrpc":"2.0","id":0,"result":"{}"}}"#, hash)
}

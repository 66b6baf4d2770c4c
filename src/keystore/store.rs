//! Flat-file key store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::keystore::credential::Credential;

/// Loads credentials from a text file with one key per line.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every non-blank line, trimmed, in file order.
    ///
    /// Never fails: an unreadable or empty file is logged and yields an
    /// empty list.
    pub fn load(&self) -> Vec<Credential> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Error loading private keys"
                );
                return Vec::new();
            }
        };

        let credentials = parse_credentials(&content);
        if credentials.is_empty() {
            tracing::warn!(path = %self.path.display(), "No keys found");
        } else {
            tracing::info!(
                path = %self.path.display(),
                count = credentials.len(),
                "Loaded private keys"
            );
        }

        credentials
    }
}

fn parse_credentials(content: &str) -> Vec<Credential> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Credential::new)
        .collect()
}

//! Attestor configuration, read from the environment.

use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::Path;

#[derive(Clone, Deserialize)]
pub struct AttestorConfig {
    /// Validator secp256k1 key (hex, optional 0x prefix)
    pub private_key: String,
    /// Chain whose swap records this attestor signs
    pub source_chain_id: u64,
    /// Destination chains it is willing to attest for
    pub dest_chain_ids: Vec<u64>,
}

/// Custom Debug that redacts private_key to prevent accidental log leakage.
impl fmt::Debug for AttestorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttestorConfig")
            .field("private_key", &"<redacted>")
            .field("source_chain_id", &self.source_chain_id)
            .field("dest_chain_ids", &self.dest_chain_ids)
            .finish()
    }
}

impl AttestorConfig {
    /// Load configuration from environment variables
    /// Loads .env file if present, then reads from environment
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env")
    }

    /// Load from a specific .env file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::load_from_env()
    }

    fn load_from_env() -> Result<Self> {
        let config = Self {
            private_key: env::var("ATTESTOR_PRIVATE_KEY")
                .map_err(|_| eyre!("ATTESTOR_PRIVATE_KEY environment variable is required"))?,
            source_chain_id: env::var("ATTESTOR_SOURCE_CHAIN_ID")
                .map_err(|_| eyre!("ATTESTOR_SOURCE_CHAIN_ID environment variable is required"))?
                .parse()
                .wrap_err("ATTESTOR_SOURCE_CHAIN_ID must be a valid u64")?,
            dest_chain_ids: parse_chain_ids(
                &env::var("ATTESTOR_DEST_CHAIN_IDS")
                    .map_err(|_| eyre!("ATTESTOR_DEST_CHAIN_IDS environment variable is required"))?,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let key = self
            .private_key
            .strip_prefix("0x")
            .unwrap_or(&self.private_key);
        if key.len() != 64 || hex::decode(key).is_err() {
            return Err(eyre!("private_key must be 32 bytes of hex (0x prefix optional)"));
        }
        if self.dest_chain_ids.is_empty() {
            return Err(eyre!("dest_chain_ids cannot be empty"));
        }
        if self.dest_chain_ids.contains(&self.source_chain_id) {
            return Err(eyre!(
                "dest_chain_ids must not contain the source chain {}",
                self.source_chain_id
            ));
        }
        Ok(())
    }

    pub fn accepts_destination(&self, chain_id: u64) -> bool {
        self.dest_chain_ids.contains(&chain_id)
    }
}

/// Parse a comma-separated chain id list, ignoring blanks.
pub fn parse_chain_ids(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .wrap_err_with(|| format!("Invalid chain id: {}", s))
        })
        .collect()
}

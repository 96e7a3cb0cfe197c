//! State definitions for the ACDM Bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Chain id this bridge instance runs on
    pub chain_id: u64,
}

// ============================================================================
// Registries
// ============================================================================

/// Activation state of a registered token
#[cw_serde]
#[derive(Copy, Eq)]
pub enum TokenState {
    Active,
    Deactivated,
}

/// Registered token, keyed by symbol
#[cw_serde]
pub struct TokenEntry {
    pub symbol: String,
    /// Token contract address
    pub token: Addr,
    pub state: TokenState,
}

/// Whitelisted chain
#[cw_serde]
pub struct ChainRecord {
    pub chain_id: u64,
    pub enabled: bool,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:acdm-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Registered tokens
/// Key: symbol, Value: TokenEntry
pub const TOKENS: Map<&str, TokenEntry> = Map::new("tokens");

/// Registration order
/// Key: registration index, Value: symbol
pub const TOKEN_ORDER: Map<u32, String> = Map::new("token_order");

/// Number of registered tokens (next registration index)
pub const TOKEN_COUNT: Item<u32> = Item::new("token_count");

/// Chain whitelist
/// Key: chain_id, Value: ChainRecord
pub const CHAINS: Map<u64, ChainRecord> = Map::new("chains");

/// Redeemed transaction ids. Entries are never removed.
/// Key: tx_id, Value: always true
pub const PROCESSED_TXS: Map<u64, bool> = Map::new("processed_txs");

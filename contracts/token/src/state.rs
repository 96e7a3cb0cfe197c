use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:acdm-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_DECIMALS: u8 = 18;

/// Token metadata and supply counters.
///
/// `total_supply == total_minted - total_burned` after every execution.
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
    pub total_minted: Uint128,
    pub total_burned: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// account => balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// (owner, spender) => remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

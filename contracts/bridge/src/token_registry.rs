//! Symbol → token registry.
//!
//! Entries are created once per symbol and can only move from `Active` to
//! `Deactivated`. Registration order is kept separately so enumeration is
//! deterministic.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{TokenEntry, TokenState, TOKENS, TOKEN_COUNT, TOKEN_ORDER};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;
const MAX_SYMBOL_LEN: usize = 12;

/// Symbols are 1-12 ASCII alphanumeric characters.
pub fn validate_symbol(symbol: &str) -> Result<(), ContractError> {
    if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
        return Err(ContractError::InvalidSymbol {
            reason: format!("length must be 1-{}, got {}", MAX_SYMBOL_LEN, symbol.len()),
        });
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ContractError::InvalidSymbol {
            reason: "only ASCII alphanumeric characters allowed".to_string(),
        });
    }
    Ok(())
}

/// Register a new symbol as `Active`.
pub fn register_token(
    storage: &mut dyn Storage,
    symbol: &str,
    token: Addr,
) -> Result<TokenEntry, ContractError> {
    if TOKENS.has(storage, symbol) {
        return Err(ContractError::DuplicateSymbol {
            symbol: symbol.to_string(),
        });
    }

    let entry = TokenEntry {
        symbol: symbol.to_string(),
        token,
        state: TokenState::Active,
    };
    TOKENS.save(storage, symbol, &entry)?;

    let index = TOKEN_COUNT.may_load(storage)?.unwrap_or(0);
    TOKEN_ORDER.save(storage, index, &entry.symbol)?;
    TOKEN_COUNT.save(storage, &(index + 1))?;

    Ok(entry)
}

/// Mark a symbol `Deactivated`. Returns the entry and whether it changed.
pub fn deactivate_token(
    storage: &mut dyn Storage,
    symbol: &str,
) -> Result<(TokenEntry, bool), ContractError> {
    let mut entry = token_by_symbol(storage, symbol)?;
    if entry.state == TokenState::Deactivated {
        return Ok((entry, false));
    }

    entry.state = TokenState::Deactivated;
    TOKENS.save(storage, symbol, &entry)?;
    Ok((entry, true))
}

/// Look up a symbol regardless of state.
pub fn token_by_symbol(storage: &dyn Storage, symbol: &str) -> Result<TokenEntry, ContractError> {
    TOKENS
        .may_load(storage, symbol)?
        .ok_or_else(|| ContractError::UnknownSymbol {
            symbol: symbol.to_string(),
        })
}

/// Look up a symbol that must be `Active`.
pub fn active_token(storage: &dyn Storage, symbol: &str) -> Result<TokenEntry, ContractError> {
    let entry = token_by_symbol(storage, symbol)?;
    if entry.state != TokenState::Active {
        return Err(ContractError::TokenInactive {
            symbol: symbol.to_string(),
        });
    }
    Ok(entry)
}

/// Entries in registration order, starting after registration index `start_after`.
pub fn token_list(
    storage: &dyn Storage,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<(u32, TokenEntry)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    TOKEN_ORDER
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (index, symbol) = item?;
            Ok((index, TOKENS.load(storage, symbol.as_str())?))
        })
        .collect()
}

//! Token and chain registry handlers (Admin only).

use common::Role;
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use super::ensure_role;
use crate::chain_registry;
use crate::error::ContractError;
use crate::token_registry;

/// Register a token contract under `symbol`.
pub fn execute_add_token(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    token: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Admin, &info.sender)?;

    token_registry::validate_symbol(&symbol)?;
    let token_addr = deps.api.addr_validate(&token)?;
    let entry = token_registry::register_token(deps.storage, &symbol, token_addr)?;

    Ok(Response::new()
        .add_attribute("method", "add_token")
        .add_attribute("symbol", entry.symbol)
        .add_attribute("token", entry.token))
}

/// Deactivate a registered symbol. Repeating the call is harmless.
pub fn execute_deactivate_token_by_symbol(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let (entry, changed) = token_registry::deactivate_token(deps.storage, &symbol)?;

    Ok(Response::new()
        .add_attribute("method", "deactivate_token")
        .add_attribute("symbol", entry.symbol)
        .add_attribute("changed", changed.to_string()))
}

/// Enable or disable a chain, creating its record if needed.
pub fn execute_update_chain_by_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    enabled: bool,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let record = chain_registry::update_chain(deps.storage, chain_id, enabled)?;

    Ok(Response::new()
        .add_attribute("method", "update_chain")
        .add_attribute("chain_id", record.chain_id.to_string())
        .add_attribute("enabled", record.enabled.to_string()))
}

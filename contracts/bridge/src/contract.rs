//! ACDM Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `token_registry` / `chain_registry` - registry storage helpers
//! - `signature` - attestation signer recovery

use common::access::{self, normalize_account};
use common::{RedeemRequest, Role};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_token, execute_deactivate_token_by_symbol, execute_grant_role, execute_redeem,
    execute_revoke_role, execute_swap, execute_update_chain_by_id,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_attestation_hash, query_chains, query_current_bridge_chain, query_has_role,
    query_is_chain_enabled, query_is_processed, query_role_members, query_token_by_symbol,
    query_token_list,
};
use crate::signature::Secp256k1Recovery;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOKEN_COUNT};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => normalize_account(deps.api, &admin)?,
        None => info.sender.to_string(),
    };
    access::grant_role(deps.storage, Role::Admin, &admin)?;

    CONFIG.save(
        deps.storage,
        &Config {
            chain_id: msg.chain_id,
        },
    )?;
    TOKEN_COUNT.save(deps.storage, &0u32)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("chain_id", msg.chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Swap {
            sender,
            symbol,
            amount,
            chain_from,
            chain_to,
        } => execute_swap(deps, info, sender, symbol, amount, chain_from, chain_to),
        ExecuteMsg::Redeem {
            recipient,
            symbol,
            amount,
            chain_from,
            chain_to,
            tx_id,
            signature,
        } => execute_redeem(
            deps,
            info,
            &Secp256k1Recovery,
            RedeemRequest {
                recipient,
                symbol,
                amount,
                chain_from,
                chain_to,
                tx_id,
                signature,
            },
        ),

        // Registries
        ExecuteMsg::AddToken { symbol, token } => execute_add_token(deps, info, symbol, token),
        ExecuteMsg::DeactivateTokenBySymbol { symbol } => {
            execute_deactivate_token_by_symbol(deps, info, symbol)
        }
        ExecuteMsg::UpdateChainById { chain_id, enabled } => {
            execute_update_chain_by_id(deps, info, chain_id, enabled)
        }

        // Roles
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CurrentBridgeChain {} => to_json_binary(&query_current_bridge_chain(deps)?),
        QueryMsg::TokenBySymbol { symbol } => {
            let entry = query_token_by_symbol(deps, symbol)
                .map_err(|e| StdError::generic_err(e.to_string()))?;
            to_json_binary(&entry)
        }
        QueryMsg::TokenList { start_after, limit } => {
            to_json_binary(&query_token_list(deps, start_after, limit)?)
        }
        QueryMsg::IsChainEnabled { chain_id } => {
            to_json_binary(&query_is_chain_enabled(deps, chain_id)?)
        }
        QueryMsg::Chains { start_after, limit } => {
            to_json_binary(&query_chains(deps, start_after, limit)?)
        }
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
        QueryMsg::IsProcessed { tx_id } => to_json_binary(&query_is_processed(deps, tx_id)?),
        QueryMsg::AttestationHash {
            recipient,
            symbol,
            amount,
            chain_from,
            chain_to,
            tx_id,
        } => to_json_binary(&query_attestation_hash(
            recipient, symbol, amount, chain_from, chain_to, tx_id,
        )),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

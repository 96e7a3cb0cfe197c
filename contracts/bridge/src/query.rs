//! Query handlers for the ACDM Bridge contract.

use common::access::{self, normalize_account};
use common::{bytes32_to_hex, Attestation, HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_std::{Deps, StdResult, Uint128};

use crate::chain_registry;
use crate::error::ContractError;
use crate::msg::{
    AttestationHashResponse, ChainsResponse, CurrentChainResponse, IsChainEnabledResponse,
    IsProcessedResponse, TokenListEntry, TokenListResponse,
};
use crate::state::{TokenEntry, CONFIG, PROCESSED_TXS};
use crate::token_registry;

// ============================================================================
// Configuration
// ============================================================================

pub fn query_current_bridge_chain(deps: Deps) -> StdResult<CurrentChainResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(CurrentChainResponse {
        chain_id: config.chain_id,
    })
}

// ============================================================================
// Registries
// ============================================================================

/// Look up a registered symbol regardless of its state.
pub fn query_token_by_symbol(deps: Deps, symbol: String) -> Result<TokenEntry, ContractError> {
    token_registry::token_by_symbol(deps.storage, &symbol)
}

pub fn query_token_list(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<TokenListResponse> {
    let tokens = token_registry::token_list(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(index, entry)| TokenListEntry { index, entry })
        .collect();
    Ok(TokenListResponse { tokens })
}

pub fn query_is_chain_enabled(deps: Deps, chain_id: u64) -> StdResult<IsChainEnabledResponse> {
    Ok(IsChainEnabledResponse {
        chain_id,
        enabled: chain_registry::is_chain_enabled(deps.storage, chain_id)?,
    })
}

pub fn query_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    Ok(ChainsResponse {
        chains: chain_registry::chains(deps.storage, start_after, limit)?,
    })
}

// ============================================================================
// Roles
// ============================================================================

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let account = normalize_account(deps.api, &account)?;
    let has_role = access::has_role(deps.storage, role, &account)?;
    Ok(HasRoleResponse {
        role,
        account,
        has_role,
    })
}

pub fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    Ok(RoleMembersResponse {
        role,
        members: access::role_members(deps.storage, role, start_after, limit)?,
    })
}

// ============================================================================
// Attestations
// ============================================================================

pub fn query_is_processed(deps: Deps, tx_id: u64) -> StdResult<IsProcessedResponse> {
    Ok(IsProcessedResponse {
        tx_id,
        processed: PROCESSED_TXS.has(deps.storage, tx_id),
    })
}

/// Pure computation; nothing is read from storage.
pub fn query_attestation_hash(
    recipient: String,
    symbol: String,
    amount: Uint128,
    chain_from: u64,
    chain_to: u64,
    tx_id: u64,
) -> AttestationHashResponse {
    let attestation = Attestation {
        recipient,
        symbol,
        amount,
        chain_from,
        chain_to,
        tx_id,
    };
    AttestationHashResponse {
        message_hash: bytes32_to_hex(&attestation.message_hash()),
        signing_digest: bytes32_to_hex(&attestation.signing_digest()),
    }
}

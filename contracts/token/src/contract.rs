//! ACDM Token Contract - Entry Points and Handlers

use common::access::{self, execute_role_change, normalize_account, RoleChange};
use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SupplyStatsResponse};
use crate::state::{
    TokenInfo, ALLOWANCES, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_DECIMALS,
    TOKEN_INFO,
};

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

    if msg.name.trim().is_empty() {
        return Err(ContractError::InvalidTokenInfo {
            reason: "name must not be empty".to_string(),
        });
    }
    if msg.symbol.is_empty()
        || msg.symbol.len() > 12
        || !msg.symbol.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ContractError::InvalidTokenInfo {
            reason: "symbol must be 1-12 ASCII alphanumeric characters".to_string(),
        });
    }

    let admin = match msg.admin {
        Some(admin) => normalize_account(deps.api, &admin)?,
        None => info.sender.to_string(),
    };
    access::grant_role(deps.storage, Role::Admin, &admin)?;

    for minter in &msg.minters {
        let minter = normalize_account(deps.api, minter)?;
        access::grant_role(deps.storage, Role::Minter, &minter)?;
    }
    for burner in &msg.burners {
        let burner = normalize_account(deps.api, burner)?;
        access::grant_role(deps.storage, Role::Burner, &burner)?;
    }

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals.unwrap_or(DEFAULT_DECIMALS),
        total_supply: Uint128::zero(),
        total_minted: Uint128::zero(),
        total_burned: Uint128::zero(),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("decimals", token_info.decimals.to_string()))
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
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, info, from, amount),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => {
            execute_revoke_role(deps, info, role, account)
        }
    }
}

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_nonzero(amount)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;

    if amount.is_zero() {
        ALLOWANCES.remove(deps.storage, (&info.sender, &spender_addr));
    } else {
        ALLOWANCES.save(deps.storage, (&info.sender, &spender_addr), &amount)?;
    }

    Ok(Response::new()
        .add_attribute("method", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount))
}

fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_nonzero(amount)?;
    let owner_addr = deps.api.addr_validate(&owner)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &info.sender))?
        .unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            available: allowance,
            required: amount,
        });
    }

    debit(deps.storage, &owner_addr, amount)?;
    credit(deps.storage, &recipient_addr, amount)?;

    let remaining = allowance - amount;
    if remaining.is_zero() {
        ALLOWANCES.remove(deps.storage, (&owner_addr, &info.sender));
    } else {
        ALLOWANCES.save(deps.storage, (&owner_addr, &info.sender), &remaining)?;
    }

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("spender", info.sender)
        .add_attribute("from", owner_addr)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Minter, &info.sender)?;
    ensure_nonzero(amount)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_add(amount)
        .map_err(|_| overflow("total supply"))?;
    token_info.total_minted = token_info
        .total_minted
        .checked_add(amount)
        .map_err(|_| overflow("total minted"))?;

    credit(deps.storage, &recipient_addr, amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Burner, &info.sender)?;
    ensure_nonzero(amount)?;
    let from_addr = deps.api.addr_validate(&from)?;

    debit(deps.storage, &from_addr, amount)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    // Cannot underflow: the debit above succeeded, so supply >= amount
    token_info.total_supply -= amount;
    token_info.total_burned = token_info
        .total_burned
        .checked_add(amount)
        .map_err(|_| overflow("total burned"))?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("burner", info.sender)
        .add_attribute("from", from_addr)
        .add_attribute("amount", amount))
}

fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    execute_role_change(deps, &info, role, account, RoleChange::Grant)
}

fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    execute_role_change(deps, &info, role, account, RoleChange::Revoke)
}

// ============================================================================
// Ledger Helpers
// ============================================================================

fn ensure_role(storage: &dyn Storage, role: Role, sender: &Addr) -> Result<(), ContractError> {
    access::ensure_role(storage, role, sender)
}

fn ensure_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn overflow(what: &str) -> ContractError {
    ContractError::InvalidAmount {
        reason: format!("{} overflow", what),
    }
}

fn debit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    BALANCES.update(storage, account, |balance| -> Result<_, ContractError> {
        let balance = balance.unwrap_or_default();
        balance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                available: balance,
                required: amount,
            })
    })?;
    Ok(())
}

fn credit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    BALANCES.update(storage, account, |balance| -> Result<_, ContractError> {
        balance
            .unwrap_or_default()
            .checked_add(amount)
            .map_err(|_| overflow("balance"))
    })?;
    Ok(())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::SupplyStats {} => to_json_binary(&query_supply_stats(deps)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &spender_addr))?
        .unwrap_or_default();
    Ok(AllowanceResponse {
        allowance,
        expires: Expiration::Never {},
    })
}

fn query_supply_stats(deps: Deps) -> StdResult<SupplyStatsResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(SupplyStatsResponse {
        total_supply: info.total_supply,
        total_minted: info.total_minted,
        total_burned: info.total_burned,
    })
}

fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let account = normalize_account(deps.api, &account)?;
    let has_role = access::has_role(deps.storage, role, &account)?;
    Ok(HasRoleResponse {
        role,
        account,
        has_role,
    })
}

fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let members = access::role_members(deps.storage, role, start_after, limit)?;
    Ok(RoleMembersResponse { role, members })
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

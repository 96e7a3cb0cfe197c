//! Outgoing transfer handler (Swap).
//!
//! Burns the amount on this chain and emits the `swap_initiated` record that
//! validators attest to. Nothing is stored; replay protection lives on the
//! redeem side.

use common::SwapRecord;
use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::BalanceResponse;
use token::msg::{ExecuteMsg as TokenExecuteMsg, QueryMsg as TokenQueryMsg};

use crate::chain_registry;
use crate::error::ContractError;
use crate::state::CONFIG;
use crate::token_registry;

/// Burn `amount` of `symbol` held by `sender` and announce the transfer to `chain_to`.
///
/// Only `sender` itself may swap its funds; the destination is part of what
/// it authorizes. The bridge burns through its Burner role on the token.
pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    symbol: String,
    amount: Uint128,
    chain_from: u64,
    chain_to: u64,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    let sender_addr = deps.api.addr_validate(&sender)?;
    if info.sender != sender_addr {
        return Err(ContractError::SenderMismatch {
            sender: sender_addr.to_string(),
            caller: info.sender.to_string(),
        });
    }

    let entry = token_registry::active_token(deps.storage, &symbol)?;

    let config = CONFIG.load(deps.storage)?;
    if chain_from != config.chain_id {
        return Err(ContractError::WrongChain {
            expected: config.chain_id,
            got: chain_from,
        });
    }
    if !chain_registry::is_chain_enabled(deps.storage, chain_to)? {
        return Err(ContractError::ChainNotSupported { chain_id: chain_to });
    }

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &entry.token,
        &TokenQueryMsg::Balance {
            address: sender_addr.to_string(),
        },
    )?;
    if balance.balance < amount {
        return Err(ContractError::InsufficientBalance {
            available: balance.balance,
            required: amount,
        });
    }

    let burn = token_msg(
        &entry.token,
        &TokenExecuteMsg::Burn {
            from: sender_addr.to_string(),
            amount,
        },
    )?;

    let record = SwapRecord {
        sender: sender_addr.to_string(),
        symbol: entry.symbol,
        token: entry.token.to_string(),
        amount,
        chain_from,
        chain_to,
    };

    Ok(Response::new()
        .add_message(burn)
        .add_event(record.to_event())
        .add_attribute("method", "swap")
        .add_attribute("sender", record.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("chain_to", chain_to.to_string()))
}

pub(crate) fn token_msg(
    token: &cosmwasm_std::Addr,
    msg: &TokenExecuteMsg,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

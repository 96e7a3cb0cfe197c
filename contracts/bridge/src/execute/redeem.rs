//! Incoming transfer handler (Redeem).
//!
//! Check order:
//! 1. transaction id not yet processed
//! 2. canonical attestation digest rebuilt from the request fields
//! 3. signer recovered from the signature
//! 4. signer holds the Validator role
//! 5. symbol registered and active
//! 6. source chain enabled, destination is this chain
//! 7. transaction id recorded (compare-and-insert)
//! 8. mint to the recipient
//!
//! Any failure reverts the whole execution, so a rejected redeem never
//! records its id and never mints.

use common::{access, bytes32_to_hex, RedeemRequest, Role};
use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};
use token::msg::ExecuteMsg as TokenExecuteMsg;

use super::swap::token_msg;
use crate::chain_registry;
use crate::error::ContractError;
use crate::signature::SignerRecovery;
use crate::state::{CONFIG, PROCESSED_TXS};
use crate::token_registry;

/// Redeem a validator-signed attestation.
pub fn execute_redeem<R: SignerRecovery>(
    deps: DepsMut,
    info: MessageInfo,
    recovery: &R,
    request: RedeemRequest,
) -> Result<Response, ContractError> {
    let tx_id = request.tx_id;
    if PROCESSED_TXS.has(deps.storage, tx_id) {
        return Err(ContractError::TxAlreadyProcessed { tx_id });
    }
    if request.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    let recipient = deps.api.addr_validate(&request.recipient)?;

    let attestation = request.attestation();
    let message_hash = attestation.message_hash();
    let digest = attestation.signing_digest();

    let validator = recovery.recover(deps.api, &digest, request.signature.as_slice())?;
    if !access::has_role(deps.storage, Role::Validator, &validator)? {
        return Err(ContractError::Unauthorized {
            role: Role::Validator,
        });
    }

    let entry = token_registry::active_token(deps.storage, &request.symbol)?;

    if !chain_registry::is_chain_enabled(deps.storage, request.chain_from)? {
        return Err(ContractError::ChainNotSupported {
            chain_id: request.chain_from,
        });
    }
    let config = CONFIG.load(deps.storage)?;
    if request.chain_to != config.chain_id {
        return Err(ContractError::WrongChain {
            expected: config.chain_id,
            got: request.chain_to,
        });
    }

    PROCESSED_TXS.update(deps.storage, tx_id, |existing| match existing {
        Some(_) => Err(ContractError::TxAlreadyProcessed { tx_id }),
        None => Ok(true),
    })?;

    let mint = token_msg(
        &entry.token,
        &TokenExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount: request.amount,
        },
    )?;

    let event = Event::new("redeemed")
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("symbol", &entry.symbol)
        .add_attribute("token", entry.token.as_str())
        .add_attribute("amount", request.amount.to_string())
        .add_attribute("chain_from", request.chain_from.to_string())
        .add_attribute("chain_to", request.chain_to.to_string())
        .add_attribute("tx_id", tx_id.to_string())
        .add_attribute("validator", &validator);

    Ok(Response::new()
        .add_message(mint)
        .add_event(event)
        .add_attribute("method", "redeem")
        .add_attribute("caller", info.sender)
        .add_attribute("tx_id", tx_id.to_string())
        .add_attribute("message_hash", bytes32_to_hex(&message_hash)))
}

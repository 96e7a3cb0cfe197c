//! Records exchanged between the bridge contracts and off-chain relays.
//!
//! `swap` emits a [`SwapRecord`] as a `swap_initiated` event. A validator
//! observes it, signs the corresponding [`Attestation`], and hands a
//! [`RedeemRequest`] to whoever submits `redeem` on the destination chain.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Event, StdError, StdResult, Uint128};

use crate::attestation::Attestation;

/// Event type emitted by a successful swap
pub const SWAP_EVENT: &str = "swap_initiated";

/// Outbound record of a burned amount awaiting attestation
#[cw_serde]
pub struct SwapRecord {
    /// Account whose tokens were burned
    pub sender: String,
    /// Registered token symbol
    pub symbol: String,
    /// Token contract the amount was burned from
    pub token: String,
    /// Burned amount
    pub amount: Uint128,
    /// Chain the swap happened on
    pub chain_from: u64,
    /// Destination chain
    pub chain_to: u64,
}

impl SwapRecord {
    pub fn to_event(&self) -> Event {
        Event::new(SWAP_EVENT)
            .add_attribute("sender", &self.sender)
            .add_attribute("symbol", &self.symbol)
            .add_attribute("token", &self.token)
            .add_attribute("amount", self.amount.to_string())
            .add_attribute("chain_from", self.chain_from.to_string())
            .add_attribute("chain_to", self.chain_to.to_string())
    }

    /// Parse a record back from an emitted event.
    ///
    /// Accepts both the bare event type and the `wasm-` prefixed type the
    /// chain reports for contract events.
    pub fn from_event(event: &Event) -> StdResult<Self> {
        if !is_swap_event(&event.ty) {
            return Err(StdError::generic_err(format!(
                "Not a swap event: {}",
                event.ty
            )));
        }

        let amount = attribute(event, "amount")?
            .parse::<u128>()
            .map_err(|e| StdError::generic_err(format!("Invalid amount: {}", e)))?;

        Ok(Self {
            sender: attribute(event, "sender")?.to_string(),
            symbol: attribute(event, "symbol")?.to_string(),
            token: attribute(event, "token")?.to_string(),
            amount: Uint128::new(amount),
            chain_from: parse_u64(event, "chain_from")?,
            chain_to: parse_u64(event, "chain_to")?,
        })
    }
}

/// Whether an event type names a swap-initiated event
pub fn is_swap_event(ty: &str) -> bool {
    ty == SWAP_EVENT || ty.strip_prefix("wasm-") == Some(SWAP_EVENT)
}

fn attribute<'a>(event: &'a Event, key: &str) -> StdResult<&'a str> {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.as_str())
        .ok_or_else(|| StdError::generic_err(format!("Missing attribute: {}", key)))
}

fn parse_u64(event: &Event, key: &str) -> StdResult<u64> {
    attribute(event, key)?
        .parse::<u64>()
        .map_err(|e| StdError::generic_err(format!("Invalid {}: {}", key, e)))
}

/// A signed attestation ready to be submitted as `redeem`
#[cw_serde]
pub struct RedeemRequest {
    pub recipient: String,
    pub symbol: String,
    pub amount: Uint128,
    pub chain_from: u64,
    pub chain_to: u64,
    pub tx_id: u64,
    /// 65-byte `r ‖ s ‖ v` secp256k1 signature over the attestation digest
    pub signature: Binary,
}

impl RedeemRequest {
    pub fn attestation(&self) -> Attestation {
        Attestation {
            recipient: self.recipient.clone(),
            symbol: self.symbol.clone(),
            amount: self.amount,
            chain_from: self.chain_from,
            chain_to: self.chain_to,
            tx_id: self.tx_id,
        }
    }
}

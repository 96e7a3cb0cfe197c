//! Swap observation and attestation
//!
//! `observe` picks the swap records this validator is responsible for out of a
//! batch of chain events; `attest` turns one of them into a signed
//! [`RedeemRequest`]. Transaction ids are assigned by the caller, which owns
//! the mapping from source-chain transactions to ids.

use common::boundary::is_swap_event;
use common::{RedeemRequest, SwapRecord};
use cosmwasm_std::Event;
use eyre::{eyre, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AttestorConfig;
use crate::signer::ValidatorSigner;

/// JSON body of the destination bridge's `redeem` execute message
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RedeemMsg {
    Redeem(RedeemRequest),
}

pub struct Attestor {
    config: AttestorConfig,
    signer: ValidatorSigner,
}

impl Attestor {
    pub fn new(config: &AttestorConfig) -> Result<Self> {
        config.validate()?;
        let signer = ValidatorSigner::from_private_key(&config.private_key)?;

        info!(
            validator = %signer.address(),
            source_chain_id = config.source_chain_id,
            dest_chain_ids = ?config.dest_chain_ids,
            "Attestor initialized"
        );

        Ok(Self {
            config: config.clone(),
            signer,
        })
    }

    /// Validator account to grant on destination bridges
    pub fn address(&self) -> &str {
        self.signer.address()
    }

    /// Extract swap records originating on the source chain and bound for a
    /// configured destination. Malformed swap events are logged and skipped.
    pub fn observe(&self, events: &[Event]) -> Vec<SwapRecord> {
        events
            .iter()
            .filter(|event| is_swap_event(&event.ty))
            .filter_map(|event| match SwapRecord::from_event(event) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed swap event");
                    None
                }
            })
            .filter(|record| {
                let relevant = record.chain_from == self.config.source_chain_id
                    && self.config.accepts_destination(record.chain_to);
                if !relevant {
                    debug!(
                        chain_from = record.chain_from,
                        chain_to = record.chain_to,
                        "Ignoring swap outside configured route"
                    );
                }
                relevant
            })
            .collect()
    }

    /// Attest a swap, paying out to the same account on the destination chain.
    pub fn attest(&self, record: &SwapRecord, tx_id: u64) -> Result<RedeemRequest> {
        self.attest_to(record, &record.sender, tx_id)
    }

    /// Attest a swap with an explicit destination recipient.
    pub fn attest_to(
        &self,
        record: &SwapRecord,
        recipient: &str,
        tx_id: u64,
    ) -> Result<RedeemRequest> {
        if record.chain_from != self.config.source_chain_id {
            return Err(eyre!(
                "Swap from chain {} is not from source chain {}",
                record.chain_from,
                self.config.source_chain_id
            ));
        }
        if !self.config.accepts_destination(record.chain_to) {
            return Err(eyre!("Destination chain {} not configured", record.chain_to));
        }
        if record.amount.is_zero() {
            return Err(eyre!("Refusing to attest a zero amount"));
        }

        let mut request = RedeemRequest {
            recipient: recipient.to_string(),
            symbol: record.symbol.clone(),
            amount: record.amount,
            chain_from: record.chain_from,
            chain_to: record.chain_to,
            tx_id,
            signature: Default::default(),
        };
        request.signature = self.signer.sign_attestation(&request.attestation())?;

        info!(
            tx_id,
            symbol = %request.symbol,
            amount = %request.amount,
            chain_to = request.chain_to,
            "Swap attested"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Uint128;

    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn attestor() -> Attestor {
        Attestor::new(&AttestorConfig {
            private_key: DEV_KEY.to_string(),
            source_chain_id: 1,
            dest_chain_ids: vec![2],
        })
        .unwrap()
    }

    fn record(chain_from: u64, chain_to: u64) -> SwapRecord {
        SwapRecord {
            sender: "terra1alice".to_string(),
            symbol: "ACDM".to_string(),
            token: "contract0".to_string(),
            amount: Uint128::new(1000),
            chain_from,
            chain_to,
        }
    }

    #[test]
    fn test_observe_filters_route_and_event_type() {
        let mut wasm_event = record(1, 2).to_event();
        wasm_event.ty = format!("wasm-{}", wasm_event.ty);

        let events = vec![
            Event::new("wasm").add_attribute("method", "swap"),
            wasm_event,
            record(1, 3).to_event(),
            record(5, 2).to_event(),
            Event::new("swap_initiated").add_attribute("sender", "terra1bob"),
        ];

        let observed = attestor().observe(&events);
        assert_eq!(observed, vec![record(1, 2)]);
    }

    #[test]
    fn test_attest_defaults_recipient_to_sender() {
        let request = attestor().attest(&record(1, 2), 7).unwrap();
        assert_eq!(request.recipient, "terra1alice");
        assert_eq!(request.tx_id, 7);
        assert_eq!(request.amount, Uint128::new(1000));
        assert_eq!(request.signature.len(), 65);
    }

    #[test]
    fn test_attest_rejects_foreign_routes() {
        let attestor = attestor();
        assert!(attestor.attest(&record(5, 2), 1).is_err());
        assert!(attestor.attest(&record(1, 9), 1).is_err());

        let mut zero = record(1, 2);
        zero.amount = Uint128::zero();
        assert!(attestor.attest(&zero, 1).is_err());
    }

    #[test]
    fn test_redeem_msg_json_shape() {
        let request = attestor()
            .attest_to(&record(1, 2), "terra1bob", 9)
            .unwrap();
        let json = serde_json::to_string(&RedeemMsg::Redeem(request)).unwrap();
        assert!(json.starts_with("{\"redeem\":{\"recipient\":\"terra1bob\""));
        assert!(json.contains("\"tx_id\":9"));
    }
}

//! ACDM Bridge Contract - Cross-Chain Token Bridging
//!
//! Moves a registered token between chains by burning on the source side and
//! minting on the destination side against a validator's signature.
//!
//! # Outgoing Flow (Swap)
//! 1. Caller invokes `Swap` on the source-chain bridge
//! 2. The bridge burns the amount from the sender's token balance
//! 3. A `swap_initiated` event carries the transfer to off-chain validators
//!
//! # Incoming Flow (Redeem)
//! 1. A validator signs the canonical attestation for the observed swap
//! 2. Anyone submits `Redeem` with that signature on the destination bridge
//! 3. The bridge recovers the signer, checks the Validator role and the
//!    registries, records the transaction id and mints to the recipient
//!
//! # Security
//! - Role-gated administration (Admin) and attestation (Validator)
//! - Permanent replay ledger keyed by transaction id
//! - Malleable (high-s) signatures rejected
//! - Chain whitelist and per-symbol activation state

pub mod chain_registry;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod signature;
pub mod state;
pub mod token_registry;

pub use crate::error::ContractError;
pub use crate::signature::{Secp256k1Recovery, SignerRecovery};

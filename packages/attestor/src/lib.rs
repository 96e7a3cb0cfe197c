//! ACDM Bridge attestor
//!
//! The off-chain half of a transfer. It observes `swap_initiated` records
//! emitted by the source-chain bridge, signs the canonical attestation with a
//! validator key and produces the `redeem` request for the destination-chain
//! bridge. It holds no chain connection of its own; feeding it events and
//! submitting its output is the relay's job.

pub mod attestor;
pub mod config;
pub mod signer;

pub use attestor::{Attestor, RedeemMsg};
pub use config::AttestorConfig;
pub use signer::ValidatorSigner;

//! Common - Shared Types and Utilities for the ACDM Bridge Contracts
//!
//! This package provides the pieces both contracts and the off-chain attestor
//! must agree on:
//!
//! - `access` - role ledger (Admin / Validator / Minter / Burner) and account normalization
//! - `attestation` - canonical redeem message encoding and hashing
//! - `boundary` - swap-initiated record and redeem request exchanged with relays

pub mod access;
pub mod attestation;
pub mod boundary;

pub use access::{HasRoleResponse, Role, RoleMembersResponse};
pub use attestation::{bytes32_to_hex, eth_signed_message_hash, keccak256, Attestation};
pub use boundary::{RedeemRequest, SwapRecord, SWAP_EVENT};

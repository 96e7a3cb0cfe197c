//! ACDM Token Contract - Role-Gated Fungible Token
//!
//! A fixed-point (18 decimals by default) balance ledger with standard
//! transfer / approve / transfer-from semantics. Supply only changes through:
//! - `Mint` - callable by Minter role holders
//! - `Burn` - callable by Burner role holders, debiting any account
//!
//! The bridge contract is granted both roles so it can burn on swap and mint
//! on redeem.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

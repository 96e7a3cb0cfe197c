//! Execute handlers for the ACDM Bridge contract.
//!
//! - `swap` - burn on the source chain and emit the swap record
//! - `redeem` - verify a validator attestation and mint
//! - `registry` - token and chain registry administration
//! - `roles` - role grants and revokes

mod redeem;
mod registry;
mod roles;
mod swap;

pub use redeem::*;
pub use registry::*;
pub use roles::*;
pub use swap::*;

use common::{access, Role};
use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;

/// Fail with `Unauthorized` unless `sender` holds `role`.
pub(crate) fn ensure_role(
    storage: &dyn Storage,
    role: Role,
    sender: &Addr,
) -> Result<(), ContractError> {
    access::ensure_role(storage, role, sender)
}

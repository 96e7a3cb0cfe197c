use common::access::RoleError;
use common::Role;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {role} role required")]
    Unauthorized { role: Role },

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },
}

impl RoleError for ContractError {
    fn unauthorized(role: Role) -> Self {
        ContractError::Unauthorized { role }
    }
}

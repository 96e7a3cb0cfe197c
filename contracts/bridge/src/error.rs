//! Error types for the ACDM Bridge contract

use common::access::RoleError;
use common::Role;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: {role} role required")]
    Unauthorized { role: Role },

    #[error("Caller {caller} may not swap funds of {sender}")]
    SenderMismatch { sender: String, caller: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("Token inactive: {symbol}")]
    TokenInactive { symbol: String },

    #[error("Symbol already registered: {symbol}")]
    DuplicateSymbol { symbol: String },

    #[error("Invalid symbol: {reason}")]
    InvalidSymbol { reason: String },

    #[error("Chain not supported: {chain_id}")]
    ChainNotSupported { chain_id: u64 },

    #[error("Wrong chain: this bridge serves chain {expected}, got {got}")]
    WrongChain { expected: u64, got: u64 },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Attestation Errors
    // ========================================================================

    #[error("Invalid signature: {reason}")]
    InvalidSignature { reason: String },

    #[error("Transaction already processed: {tx_id}")]
    TxAlreadyProcessed { tx_id: u64 },
}

impl RoleError for ContractError {
    fn unauthorized(role: Role) -> Self {
        ContractError::Unauthorized { role }
    }
}

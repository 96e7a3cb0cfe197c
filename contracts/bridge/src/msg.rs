//! Message types for the ACDM Bridge contract

use common::{HasRoleResponse, RedeemRequest, Role, RoleMembersResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::{ChainRecord, TokenEntry};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Bootstrap Admin. Defaults to the instantiating account.
    pub admin: Option<String>,
    /// Chain id of the ledger this instance is deployed on
    pub chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Burn `amount` of `symbol` from `sender` and emit a swap record for
    /// `chain_to`. The caller must be `sender` or hold a sufficient allowance
    /// from `sender` granted to this bridge.
    Swap {
        sender: String,
        symbol: String,
        amount: Uint128,
        chain_from: u64,
        chain_to: u64,
    },

    /// Mint against a validator-signed attestation. Anyone may submit.
    Redeem {
        recipient: String,
        symbol: String,
        amount: Uint128,
        chain_from: u64,
        chain_to: u64,
        tx_id: u64,
        /// 65-byte `r ‖ s ‖ v` signature
        signature: Binary,
    },

    // ========================================================================
    // Registry Administration (Admin)
    // ========================================================================
    AddToken {
        symbol: String,
        /// Token contract address
        token: String,
    },

    DeactivateTokenBySymbol {
        symbol: String,
    },

    /// Create or toggle a chain record
    UpdateChainById {
        chain_id: u64,
        enabled: bool,
    },

    // ========================================================================
    // Roles (Admin)
    // ========================================================================
    GrantRole {
        role: Role,
        account: String,
    },

    RevokeRole {
        role: Role,
        account: String,
    },
}

impl From<RedeemRequest> for ExecuteMsg {
    fn from(request: RedeemRequest) -> Self {
        ExecuteMsg::Redeem {
            recipient: request.recipient,
            symbol: request.symbol,
            amount: request.amount,
            chain_from: request.chain_from,
            chain_to: request.chain_to,
            tx_id: request.tx_id,
            signature: request.signature,
        }
    }
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Chain id this bridge serves
    #[returns(CurrentChainResponse)]
    CurrentBridgeChain {},

    #[returns(TokenEntry)]
    TokenBySymbol { symbol: String },

    /// Registered tokens in registration order. `start_after` is a
    /// registration index.
    #[returns(TokenListResponse)]
    TokenList {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(IsChainEnabledResponse)]
    IsChainEnabled { chain_id: u64 },

    #[returns(ChainsResponse)]
    Chains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Whether `tx_id` has already been redeemed
    #[returns(IsProcessedResponse)]
    IsProcessed { tx_id: u64 },

    /// Canonical attestation hash and the digest a validator signs
    #[returns(AttestationHashResponse)]
    AttestationHash {
        recipient: String,
        symbol: String,
        amount: Uint128,
        chain_from: u64,
        chain_to: u64,
        tx_id: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct CurrentChainResponse {
    pub chain_id: u64,
}

/// One page of registered tokens
#[cw_serde]
pub struct TokenListResponse {
    pub tokens: Vec<TokenListEntry>,
}

/// Token entry with its registration index (usable as `start_after`)
#[cw_serde]
pub struct TokenListEntry {
    pub index: u32,
    pub entry: TokenEntry,
}

#[cw_serde]
pub struct IsChainEnabledResponse {
    pub chain_id: u64,
    pub enabled: bool,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chains: Vec<ChainRecord>,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub tx_id: u64,
    pub processed: bool,
}

#[cw_serde]
pub struct AttestationHashResponse {
    /// keccak256 of the canonical encoding, 0x-prefixed hex
    pub message_hash: String,
    /// EIP-191 signed-message digest of `message_hash`, 0x-prefixed hex
    pub signing_digest: String,
}

use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::{AllowanceResponse, BalanceResponse, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Defaults to 18
    pub decimals: Option<u8>,
    /// Bootstrap admin (defaults to the instantiating account)
    pub admin: Option<String>,
    /// Accounts granted the Minter role at creation
    #[serde(default)]
    pub minters: Vec<String>,
    /// Accounts granted the Burner role at creation
    #[serde(default)]
    pub burners: Vec<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` from the caller to `recipient`
    Transfer { recipient: String, amount: Uint128 },
    /// Set the allowance `spender` may move out of the caller's balance
    Approve { spender: String, amount: Uint128 },
    /// Spend allowance granted by `owner` to the caller
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Minter only: create `amount` for `recipient`
    Mint { recipient: String, amount: Uint128 },
    /// Burner only: destroy `amount` held by `from`
    Burn { from: String, amount: Uint128 },
    /// Admin only
    GrantRole { role: Role, account: String },
    /// Admin only
    RevokeRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Minted / burned counters next to the current supply
    #[returns(SupplyStatsResponse)]
    SupplyStats {},
    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },
    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct SupplyStatsResponse {
    pub total_supply: Uint128,
    pub total_minted: Uint128,
    pub total_burned: Uint128,
}

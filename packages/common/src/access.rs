//! Role-based access control.
//!
//! Grants are stored as a set of `(role, account)` pairs under a fixed
//! namespace. Every contract has its own storage, so the bridge and each token
//! keep independent ledgers even though they share this module.
//!
//! Accounts are normalized before they touch storage:
//! - `0x` + 40 hex characters: an EVM-style signing account, lowercased
//! - anything else: a local account, checked with `addr_validate`

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, DepsMut, MessageInfo, Order, Response, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

/// Roles understood by the bridge and token contracts
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum Role {
    /// Manages roles and registries
    Admin,
    /// Signs redeem attestations
    Validator,
    /// May mint tokens
    Minter,
    /// May burn tokens
    Burner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Validator => "validator",
            Role::Minter => "minter",
            Role::Burner => "burner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role grants
/// Key: (role, normalized account), Value: always true
pub const ROLE_GRANTS: Map<(&str, &str), bool> = Map::new("role_grants");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cw_serde]
pub struct HasRoleResponse {
    pub role: Role,
    pub account: String,
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<String>,
}

/// Normalize an account string into the form used as a storage key.
pub fn normalize_account(api: &dyn Api, account: &str) -> StdResult<String> {
    let hex_part = account
        .strip_prefix("0x")
        .or_else(|| account.strip_prefix("0X"));

    match hex_part {
        Some(raw) => {
            if raw.len() != 40 {
                return Err(StdError::generic_err(format!(
                    "Invalid EVM address: expected 40 hex characters, got {}",
                    raw.len()
                )));
            }
            hex::decode(raw)
                .map_err(|e| StdError::generic_err(format!("Invalid EVM address: {}", e)))?;
            Ok(format!("0x{}", raw.to_ascii_lowercase()))
        }
        None => Ok(api.addr_validate(account)?.into_string()),
    }
}

/// Check whether `account` (already normalized) holds `role`.
pub fn has_role(storage: &dyn Storage, role: Role, account: &str) -> StdResult<bool> {
    Ok(ROLE_GRANTS
        .may_load(storage, (role.as_str(), account))?
        .unwrap_or(false))
}

/// Grant `role` to `account`. Returns false if the grant already existed.
pub fn grant_role(storage: &mut dyn Storage, role: Role, account: &str) -> StdResult<bool> {
    if has_role(storage, role, account)? {
        return Ok(false);
    }
    ROLE_GRANTS.save(storage, (role.as_str(), account), &true)?;
    Ok(true)
}

/// Revoke `role` from `account`. Returns false if there was nothing to revoke.
pub fn revoke_role(storage: &mut dyn Storage, role: Role, account: &str) -> StdResult<bool> {
    if !has_role(storage, role, account)? {
        return Ok(false);
    }
    ROLE_GRANTS.remove(storage, (role.as_str(), account));
    Ok(true)
}

/// List holders of `role` in ascending account order.
pub fn role_members(
    storage: &dyn Storage,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<String>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    ROLE_GRANTS
        .prefix(role.as_str())
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

/// Contract errors that can report a missing role.
pub trait RoleError: From<StdError> {
    fn unauthorized(role: Role) -> Self;
}

/// Fail with the contract's unauthorized error unless `sender` holds `role`.
pub fn ensure_role<E: RoleError>(storage: &dyn Storage, role: Role, sender: &Addr) -> Result<(), E> {
    if !has_role(storage, role, sender.as_str())? {
        return Err(E::unauthorized(role));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    Grant,
    Revoke,
}

/// Admin-only grant or revoke, shared by every contract with a role ledger.
///
/// Re-granting or revoking a missing grant succeeds with `changed = false`.
pub fn execute_role_change<E: RoleError>(
    deps: DepsMut,
    info: &MessageInfo,
    role: Role,
    account: String,
    change: RoleChange,
) -> Result<Response, E> {
    ensure_role::<E>(deps.storage, Role::Admin, &info.sender)?;

    let account = normalize_account(deps.api, &account)?;
    let (method, changed) = match change {
        RoleChange::Grant => ("role_granted", grant_role(deps.storage, role, &account)?),
        RoleChange::Revoke => ("role_revoked", revoke_role(deps.storage, role, &account)?),
    };

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("role", role.as_str())
        .add_attribute("account", account)
        .add_attribute("changed", changed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    #[test]
    fn test_grant_is_idempotent() {
        let mut deps = mock_dependencies();

        assert!(grant_role(deps.as_mut().storage, Role::Minter, "terra1minter").unwrap());
        assert!(!grant_role(deps.as_mut().storage, Role::Minter, "terra1minter").unwrap());
        assert!(has_role(deps.as_ref().storage, Role::Minter, "terra1minter").unwrap());

        let members =
            role_members(deps.as_ref().storage, Role::Minter, None, None).unwrap();
        assert_eq!(members, vec!["terra1minter".to_string()]);
    }

    #[test]
    fn test_roles_are_independent() {
        let mut deps = mock_dependencies();

        grant_role(deps.as_mut().storage, Role::Minter, "terra1both").unwrap();
        grant_role(deps.as_mut().storage, Role::Burner, "terra1both").unwrap();
        revoke_role(deps.as_mut().storage, Role::Minter, "terra1both").unwrap();

        assert!(!has_role(deps.as_ref().storage, Role::Minter, "terra1both").unwrap());
        assert!(has_role(deps.as_ref().storage, Role::Burner, "terra1both").unwrap());
    }

    #[test]
    fn test_revoke_missing_grant() {
        let mut deps = mock_dependencies();
        assert!(!revoke_role(deps.as_mut().storage, Role::Admin, "terra1nobody").unwrap());
    }

    #[test]
    fn test_role_members_pagination() {
        let mut deps = mock_dependencies();
        for account in ["terra1a", "terra1b", "terra1c"] {
            grant_role(deps.as_mut().storage, Role::Validator, account).unwrap();
        }
        grant_role(deps.as_mut().storage, Role::Admin, "terra1admin").unwrap();

        let page = role_members(
            deps.as_ref().storage,
            Role::Validator,
            Some("terra1a".to_string()),
            Some(1),
        )
        .unwrap();
        assert_eq!(page, vec!["terra1b".to_string()]);
    }

    #[test]
    fn test_normalize_evm_account() {
        let deps = mock_dependencies();
        let normalized = normalize_account(
            deps.as_ref().api,
            "0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266",
        )
        .unwrap();
        assert_eq!(normalized, "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");

        assert!(normalize_account(deps.as_ref().api, "0x1234").is_err());
        assert!(normalize_account(
            deps.as_ref().api,
            "0xzz9fd6e51aad88f6f4ce6ab8827279cfffb92266"
        )
        .is_err());
    }

    #[test]
    fn test_normalize_local_account() {
        let deps = mock_dependencies();
        let normalized = normalize_account(deps.as_ref().api, "terra1user").unwrap();
        assert_eq!(normalized, "terra1user");
    }

    #[derive(Debug, PartialEq)]
    enum TestError {
        Std(StdError),
        Unauthorized(Role),
    }

    impl From<StdError> for TestError {
        fn from(e: StdError) -> Self {
            TestError::Std(e)
        }
    }

    impl RoleError for TestError {
        fn unauthorized(role: Role) -> Self {
            TestError::Unauthorized(role)
        }
    }

    fn attr<'a>(res: &'a Response, key: &str) -> &'a str {
        res.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_role_change_requires_admin() {
        let mut deps = mock_dependencies();

        let err = execute_role_change::<TestError>(
            deps.as_mut(),
            &mock_info("terra1intruder", &[]),
            Role::Minter,
            "terra1intruder".to_string(),
            RoleChange::Grant,
        )
        .unwrap_err();
        assert_eq!(err, TestError::Unauthorized(Role::Admin));
        assert!(!has_role(deps.as_ref().storage, Role::Minter, "terra1intruder").unwrap());
    }

    #[test]
    fn test_role_change_grant_then_revoke() {
        let mut deps = mock_dependencies();
        grant_role(deps.as_mut().storage, Role::Admin, "terra1admin").unwrap();
        let admin = mock_info("terra1admin", &[]);

        let res = execute_role_change::<TestError>(
            deps.as_mut(),
            &admin,
            Role::Validator,
            "0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266".to_string(),
            RoleChange::Grant,
        )
        .unwrap();
        assert_eq!(attr(&res, "method"), "role_granted");
        assert_eq!(attr(&res, "account"), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        assert_eq!(attr(&res, "changed"), "true");

        let res = execute_role_change::<TestError>(
            deps.as_mut(),
            &admin,
            Role::Validator,
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string(),
            RoleChange::Grant,
        )
        .unwrap();
        assert_eq!(attr(&res, "changed"), "false");

        let res = execute_role_change::<TestError>(
            deps.as_mut(),
            &admin,
            Role::Validator,
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string(),
            RoleChange::Revoke,
        )
        .unwrap();
        assert_eq!(attr(&res, "method"), "role_revoked");
        assert_eq!(attr(&res, "changed"), "true");
        assert!(role_members(deps.as_ref().storage, Role::Validator, None, None)
            .unwrap()
            .is_empty());
    }
}

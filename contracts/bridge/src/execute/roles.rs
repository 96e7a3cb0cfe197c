//! Role administration handlers (Admin only).

use common::access::{execute_role_change, RoleChange};
use common::Role;
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;

/// Grant a role. Granting an existing grant is a no-op (`changed = false`).
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    execute_role_change(deps, &info, role, account, RoleChange::Grant)
}

/// Revoke a role.
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    execute_role_change(deps, &info, role, account, RoleChange::Revoke)
}

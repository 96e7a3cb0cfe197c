//! Integration tests for the ACDM token contract using cw-multi-test.
//!
//! Covers role-gated mint/burn, transfer and allowance accounting, role
//! administration, and the supply invariant.

use common::{HasRoleResponse, Role};
use cosmwasm_std::{Addr, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, TokenInfoResponse};
use cw_multi_test::{App, ContractWrapper, Executor};

use token::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, SupplyStatsResponse};

const OWNER: &str = "terra1owner";
const ALICE: &str = "terra1alice";
const BOB: &str = "terra1bob";

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    );
    Box::new(contract)
}

/// 10,000,000 whole tokens at 18 decimals
fn ten_million() -> Uint128 {
    Uint128::new(10_000_000u128 * 10u128.pow(18))
}

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);

    let code_id = app.store_code(contract_token());
    let token_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                name: "Academy Token".to_string(),
                symbol: "ACDM".to_string(),
                decimals: None,
                admin: None,
                minters: vec![OWNER.to_string()],
                burners: vec![OWNER.to_string()],
            },
            &[],
            "acdm-token",
            Some(OWNER.to_string()),
        )
        .unwrap();

    (app, token_addr)
}

fn balance(app: &App, token: &Addr, address: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn supply(app: &App, token: &Addr) -> SupplyStatsResponse {
    app.wrap()
        .query_wasm_smart(token, &QueryMsg::SupplyStats {})
        .unwrap()
}

fn mint(app: &mut App, token: &Addr, recipient: &str, amount: Uint128) {
    app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        },
        &[],
    )
    .unwrap();
}

// ============================================================================
// Mint / Burn
// ============================================================================

#[test]
fn test_token_info_defaults_to_18_decimals() {
    let (app, token) = setup();
    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&token, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.symbol, "ACDM");
    assert_eq!(info.decimals, 18);
    assert_eq!(info.total_supply, Uint128::zero());
}

#[test]
fn test_mint_then_burn_scenario() {
    let (mut app, token) = setup();

    mint(&mut app, &token, OWNER, ten_million());
    assert_eq!(balance(&app, &token, OWNER), ten_million());

    app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &ExecuteMsg::Burn {
            from: OWNER.to_string(),
            amount: Uint128::new(123),
        },
        &[],
    )
    .unwrap();

    assert_eq!(
        balance(&app, &token, OWNER),
        ten_million() - Uint128::new(123)
    );

    let stats = supply(&app, &token);
    assert_eq!(stats.total_minted, ten_million());
    assert_eq!(stats.total_burned, Uint128::new(123));
    assert_eq!(stats.total_supply, stats.total_minted - stats.total_burned);
}

#[test]
fn test_mint_requires_minter_role() {
    let (mut app, token) = setup();

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Mint {
            recipient: ALICE.to_string(),
            amount: Uint128::new(1),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Unauthorized") && err_str.contains("minter"),
        "Expected minter-only error, got: {}",
        err_str
    );
}

#[test]
fn test_mint_zero_rejected() {
    let (mut app, token) = setup();

    let res = app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &ExecuteMsg::Mint {
            recipient: OWNER.to_string(),
            amount: Uint128::zero(),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid amount"),
        "Expected invalid amount error, got: {}",
        err_str
    );
}

#[test]
fn test_burn_requires_burner_role() {
    let (mut app, token) = setup();
    mint(&mut app, &token, ALICE, Uint128::new(500));

    // Holding the funds is not enough
    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Burn {
            from: ALICE.to_string(),
            amount: Uint128::new(100),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("burner"),
        "Expected burner-only error, got: {}",
        err_str
    );
    assert_eq!(balance(&app, &token, ALICE), Uint128::new(500));
}

#[test]
fn test_burn_more_than_balance_leaves_state_unchanged() {
    let (mut app, token) = setup();
    mint(&mut app, &token, ALICE, Uint128::new(500));

    let res = app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &ExecuteMsg::Burn {
            from: ALICE.to_string(),
            amount: Uint128::new(501),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Insufficient balance"),
        "Expected insufficient balance error, got: {}",
        err_str
    );

    assert_eq!(balance(&app, &token, ALICE), Uint128::new(500));
    let stats = supply(&app, &token);
    assert_eq!(stats.total_supply, Uint128::new(500));
    assert_eq!(stats.total_burned, Uint128::zero());
}

// ============================================================================
// Transfer / Allowance
// ============================================================================

#[test]
fn test_transfer_moves_balance() {
    let (mut app, token) = setup();
    mint(&mut app, &token, ALICE, Uint128::new(1_000));

    app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Transfer {
            recipient: BOB.to_string(),
            amount: Uint128::new(400),
        },
        &[],
    )
    .unwrap();

    assert_eq!(balance(&app, &token, ALICE), Uint128::new(600));
    assert_eq!(balance(&app, &token, BOB), Uint128::new(400));
}

#[test]
fn test_transfer_insufficient_balance() {
    let (mut app, token) = setup();
    mint(&mut app, &token, ALICE, Uint128::new(10));

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Transfer {
            recipient: BOB.to_string(),
            amount: Uint128::new(11),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Insufficient balance"),
        "Expected insufficient balance error, got: {}",
        err_str
    );
    assert_eq!(balance(&app, &token, BOB), Uint128::zero());
}

#[test]
fn test_transfer_from_consumes_allowance() {
    let (mut app, token) = setup();
    mint(&mut app, &token, ALICE, Uint128::new(1_000));

    app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Approve {
            spender: BOB.to_string(),
            amount: Uint128::new(300),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        Addr::unchecked(BOB),
        token.clone(),
        &ExecuteMsg::TransferFrom {
            owner: ALICE.to_string(),
            recipient: BOB.to_string(),
            amount: Uint128::new(200),
        },
        &[],
    )
    .unwrap();

    let allowance: AllowanceResponse = app
        .wrap()
        .query_wasm_smart(
            &token,
            &QueryMsg::Allowance {
                owner: ALICE.to_string(),
                spender: BOB.to_string(),
            },
        )
        .unwrap();
    assert_eq!(allowance.allowance, Uint128::new(100));
    assert_eq!(balance(&app, &token, ALICE), Uint128::new(800));
    assert_eq!(balance(&app, &token, BOB), Uint128::new(200));

    // Remaining allowance is smaller than the request
    let res = app.execute_contract(
        Addr::unchecked(BOB),
        token.clone(),
        &ExecuteMsg::TransferFrom {
            owner: ALICE.to_string(),
            recipient: BOB.to_string(),
            amount: Uint128::new(101),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Insufficient allowance"),
        "Expected insufficient allowance error, got: {}",
        err_str
    );
}

#[test]
fn test_transfer_from_balance_shortfall_keeps_allowance() {
    let (mut app, token) = setup();
    mint(&mut app, &token, ALICE, Uint128::new(50));

    app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Approve {
            spender: BOB.to_string(),
            amount: Uint128::new(300),
        },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        Addr::unchecked(BOB),
        token.clone(),
        &ExecuteMsg::TransferFrom {
            owner: ALICE.to_string(),
            recipient: BOB.to_string(),
            amount: Uint128::new(100),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Insufficient balance"));

    let allowance: AllowanceResponse = app
        .wrap()
        .query_wasm_smart(
            &token,
            &QueryMsg::Allowance {
                owner: ALICE.to_string(),
                spender: BOB.to_string(),
            },
        )
        .unwrap();
    assert_eq!(allowance.allowance, Uint128::new(300));
}

// ============================================================================
// Roles
// ============================================================================

#[test]
fn test_grant_role_admin_only_and_idempotent() {
    let (mut app, token) = setup();

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::GrantRole {
            role: Role::Minter,
            account: ALICE.to_string(),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    for expected_changed in ["true", "false"] {
        let res = app
            .execute_contract(
                Addr::unchecked(OWNER),
                token.clone(),
                &ExecuteMsg::GrantRole {
                    role: Role::Minter,
                    account: ALICE.to_string(),
                },
                &[],
            )
            .unwrap();
        let changed = res
            .events
            .iter()
            .flat_map(|e| &e.attributes)
            .find(|a| a.key == "changed")
            .map(|a| a.value.clone())
            .unwrap();
        assert_eq!(changed, expected_changed);
    }

    mint(&mut app, &token, BOB, Uint128::new(1));
    app.execute_contract(
        Addr::unchecked(ALICE),
        token.clone(),
        &ExecuteMsg::Mint {
            recipient: BOB.to_string(),
            amount: Uint128::new(1),
        },
        &[],
    )
    .unwrap();
    assert_eq!(balance(&app, &token, BOB), Uint128::new(2));
}

#[test]
fn test_revoke_role() {
    let (mut app, token) = setup();

    app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &ExecuteMsg::RevokeRole {
            role: Role::Minter,
            account: OWNER.to_string(),
        },
        &[],
    )
    .unwrap();

    let res: HasRoleResponse = app
        .wrap()
        .query_wasm_smart(
            &token,
            &QueryMsg::HasRole {
                role: Role::Minter,
                account: OWNER.to_string(),
            },
        )
        .unwrap();
    assert!(!res.has_role);

    let res = app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &ExecuteMsg::Mint {
            recipient: OWNER.to_string(),
            amount: Uint128::new(1),
        },
        &[],
    );
    assert!(res.is_err());
}

// ============================================================================
// Supply Invariant
// ============================================================================

#[test]
fn test_supply_matches_sum_of_balances() {
    let (mut app, token) = setup();
    let accounts = [OWNER, ALICE, BOB];

    mint(&mut app, &token, ALICE, Uint128::new(7_000));
    mint(&mut app, &token, BOB, Uint128::new(3_000));

    let steps: Vec<ExecuteMsg> = vec![
        ExecuteMsg::Burn {
            from: ALICE.to_string(),
            amount: Uint128::new(1_500),
        },
        ExecuteMsg::Mint {
            recipient: OWNER.to_string(),
            amount: Uint128::new(250),
        },
        ExecuteMsg::Burn {
            from: BOB.to_string(),
            amount: Uint128::new(3_001),
        },
        ExecuteMsg::Burn {
            from: BOB.to_string(),
            amount: Uint128::new(3_000),
        },
    ];

    for step in steps {
        // Failing steps are part of the sequence on purpose
        let _ = app.execute_contract(Addr::unchecked(OWNER), token.clone(), &step, &[]);

        let total: Uint128 = accounts.iter().map(|a| balance(&app, &token, a)).sum();
        let stats = supply(&app, &token);
        assert_eq!(total, stats.total_minted - stats.total_burned);
        assert_eq!(total, stats.total_supply);
    }

    assert_eq!(supply(&app, &token).total_supply, Uint128::new(5_750));
}

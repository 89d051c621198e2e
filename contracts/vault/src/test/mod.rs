#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use crate::{Vault, VaultClient, VaultError};

struct Setup<'a> {
    env: Env,
    bridge: Address,
    provider: Address,
    token: TokenClient<'a>,
    token_admin: StellarAssetClient<'a>,
    vault: VaultClient<'a>,
}

impl<'a> Setup<'a> {
    /// Vault seeded with `liquidity` from a single provider.
    fn new(liquidity: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let bridge = Address::generate(&env);
        let provider = Address::generate(&env);

        let token_id = env.register_stellar_asset_contract_v2(admin).address();
        let token = TokenClient::new(&env, &token_id);
        let token_admin = StellarAssetClient::new(&env, &token_id);

        let vault_id = env.register_contract(None, Vault);
        let vault = VaultClient::new(&env, &vault_id);
        vault.initialize(&token_id, &bridge);

        if liquidity > 0 {
            token_admin.mint(&provider, &liquidity);
            vault.deposit(&provider, &liquidity);
        }

        Setup { env, bridge, provider, token, token_admin, vault }
    }
}

// ---------- Initialization ----------

#[test]
fn initialize_records_token_and_bridge() {
    let s = Setup::new(0);
    assert_eq!(s.vault.token(), Some(s.token.address.clone()));
    assert_eq!(s.vault.bridge(), Some(s.bridge.clone()));
    assert_eq!(s.vault.available(), 0);
    assert_eq!(s.vault.outstanding(), 0);
}

#[test]
fn double_initialize_fails() {
    let s = Setup::new(0);
    let result = s.vault.try_initialize(&s.token.address, &s.bridge);
    assert_eq!(result, Err(Ok(VaultError::AlreadyInitialized)));
}

// ---------- Deposit ----------

#[test]
fn deposit_increases_available_and_holds_tokens() {
    let s = Setup::new(1_000);
    assert_eq!(s.vault.available(), 1_000);
    assert_eq!(s.token.balance(&s.vault.address), 1_000);
    assert_eq!(s.token.balance(&s.provider), 0);
}

#[test]
fn zero_deposit_is_rejected() {
    let s = Setup::new(0);
    let result = s.vault.try_deposit(&s.provider, &0);
    assert_eq!(result, Err(Ok(VaultError::InvalidAmount)));
}

// ---------- Lend ----------

#[test]
fn lend_moves_principal_to_bridge() {
    let s = Setup::new(1_000);

    let lent = s.vault.lend(&s.bridge, &400);
    assert_eq!(lent, 400);
    assert_eq!(s.vault.available(), 600);
    assert_eq!(s.vault.outstanding(), 400);
    assert_eq!(s.token.balance(&s.bridge), 400);
    assert_eq!(s.token.balance(&s.vault.address), 600);
}

#[test]
fn lend_beyond_available_is_rejected() {
    let s = Setup::new(1_000);

    let result = s.vault.try_lend(&s.bridge, &1_001);
    assert_eq!(result, Err(Ok(VaultError::InsufficientLiquidity)));
    assert_eq!(s.vault.available(), 1_000);
    assert_eq!(s.vault.outstanding(), 0);
}

#[test]
fn lend_entire_balance_leaves_zero() {
    let s = Setup::new(1_000);
    s.vault.lend(&s.bridge, &1_000);
    assert_eq!(s.vault.available(), 0);

    let result = s.vault.try_lend(&s.bridge, &1);
    assert_eq!(result, Err(Ok(VaultError::InsufficientLiquidity)));
}

#[test]
fn lend_from_non_bridge_is_unauthorized() {
    let s = Setup::new(1_000);
    let stranger = Address::generate(&s.env);

    let result = s.vault.try_lend(&stranger, &10);
    assert_eq!(result, Err(Ok(VaultError::Unauthorized)));
    assert_eq!(s.vault.available(), 1_000);
}

#[test]
fn non_positive_lend_is_rejected() {
    let s = Setup::new(1_000);
    assert_eq!(s.vault.try_lend(&s.bridge, &0), Err(Ok(VaultError::InvalidAmount)));
    assert_eq!(s.vault.try_lend(&s.bridge, &-5), Err(Ok(VaultError::InvalidAmount)));
}

// ---------- Repay ----------

#[test]
fn repay_restores_available() {
    let s = Setup::new(1_000);
    s.vault.lend(&s.bridge, &400);

    s.token.transfer(&s.bridge, &s.vault.address, &400);
    let available = s.vault.repay(&s.bridge, &400);

    assert_eq!(available, 1_000);
    assert_eq!(s.vault.available(), 1_000);
    assert_eq!(s.vault.outstanding(), 0);
}

#[test]
fn repay_without_transfer_is_rejected() {
    let s = Setup::new(1_000);
    s.vault.lend(&s.bridge, &400);

    let result = s.vault.try_repay(&s.bridge, &400);
    assert_eq!(result, Err(Ok(VaultError::RepaymentNotReceived)));
    assert_eq!(s.vault.available(), 600);
}

#[test]
fn repay_more_than_outstanding_is_rejected() {
    let s = Setup::new(1_000);
    s.vault.lend(&s.bridge, &400);
    s.token_admin.mint(&s.bridge, &100);
    s.token.transfer(&s.bridge, &s.vault.address, &500);

    let result = s.vault.try_repay(&s.bridge, &500);
    assert_eq!(result, Err(Ok(VaultError::ExcessRepayment)));
    assert_eq!(s.vault.outstanding(), 400);
}

#[test]
fn repay_from_non_bridge_is_unauthorized() {
    let s = Setup::new(1_000);
    s.vault.lend(&s.bridge, &400);
    s.token.transfer(&s.bridge, &s.vault.address, &400);

    let stranger = Address::generate(&s.env);
    let result = s.vault.try_repay(&stranger, &400);
    assert_eq!(result, Err(Ok(VaultError::Unauthorized)));
    assert_eq!(s.vault.available(), 600);
}

// ---------- Events ----------

#[test]
fn lend_publishes_liquidity_event() {
    let s = Setup::new(1_000);
    s.vault.lend(&s.bridge, &250);

    let from_vault = s
        .env
        .events()
        .all()
        .iter()
        .filter(|(contract, _, _)| *contract == s.vault.address)
        .count();
    assert!(from_vault >= 1, "lend should publish a vault event");
}

use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, Map};

use crate::errors::BridgeError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const LOAN_LIFETIME_THRESHOLD: u32 = 17280;
const LOAN_BUMP_AMOUNT: u32 = 518400;

/// Construction-time configuration. Never rewritten after `initialize`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Domain this bridge lives on, as reported by both endpoints.
    pub domain: u32,
    /// Asset being lent.
    pub token: Address,
    pub vault: Address,
    /// Outbound endpoint; every `send` goes through it.
    pub messenger: Address,
    /// Inbound endpoint; the only caller trusted to deliver messages.
    /// Soroban forbids re-entering a contract already on the call stack, so
    /// it is a different contract from `messenger`: a repayment is sent
    /// while the inbound delivery is still running.
    pub inbox: Address,
    /// Native gas-equivalent asset the flat fee is paid in.
    pub fee_token: Address,
    pub flat_fee: i128,
    pub owner: Address,
    /// Bridge address on every domain this instance can reach.
    pub counterparts: Map<u32, Address>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LoanState {
    Initiated = 0,
    DispatchedToDestination = 1,
    ExecutedAtDestination = 2,
    RepaymentDispatched = 3,
    Settled = 4,
    Failed = 5,
}

/// One domain's record of a loan. Both domains key it by the same
/// `loan_id`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loan {
    pub loan_id: BytesN<32>,
    pub source_domain: u32,
    pub destination_domain: u32,
    pub nonce: u64,
    pub amount: i128,
    pub borrower: Address,
    pub target: Address,
    pub call_data: Bytes,
    /// Flat fee collected at initiation; zero on the destination record.
    pub fee: i128,
    pub state: LoanState,
    /// Ledger sequence of the last transition.
    pub updated_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReentrancyGuard {
    pub locked: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Nonce,
    AccruedFees,
    ForfeitedFees,
    Reentrancy,
    Loan(BytesN<32>),
}

pub fn get_config(env: &Env) -> Option<BridgeConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &BridgeConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
}

/// Returns the current nonce and stores its successor.
pub fn take_nonce(env: &Env) -> Result<u64, BridgeError> {
    let nonce = get_nonce(env);
    let next = nonce.checked_add(1).ok_or(BridgeError::Overflow)?;
    env.storage().instance().set(&DataKey::Nonce, &next);
    Ok(nonce)
}

pub fn get_accrued_fees(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::AccruedFees).unwrap_or(0)
}

pub fn set_accrued_fees(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::AccruedFees, &amount);
}

pub fn get_forfeited_fees(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::ForfeitedFees).unwrap_or(0)
}

pub fn set_forfeited_fees(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::ForfeitedFees, &amount);
}

pub fn get_reentrancy_guard(env: &Env) -> ReentrancyGuard {
    env.storage()
        .instance()
        .get(&DataKey::Reentrancy)
        .unwrap_or(ReentrancyGuard { locked: false })
}

pub fn set_reentrancy_guard(env: &Env, guard: &ReentrancyGuard) {
    env.storage().instance().set(&DataKey::Reentrancy, guard);
}

pub fn get_loan(env: &Env, loan_id: &BytesN<32>) -> Option<Loan> {
    env.storage().persistent().get(&DataKey::Loan(loan_id.clone()))
}

pub fn has_loan(env: &Env, loan_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Loan(loan_id.clone()))
}

pub fn set_loan(env: &Env, loan: &Loan) {
    let key = DataKey::Loan(loan.loan_id.clone());
    env.storage().persistent().set(&key, loan);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerRoles {
    /// Gates plain mint and burn.
    pub owner: Address,
    /// The bridge on this domain; the only account allowed to move
    /// supply across domains.
    pub crosschain_minter: Address,
}

#[contracttype]
pub enum LedgerKey {
    Balance(Address),
    TotalSupply,
    Roles,
}

pub fn has_roles(env: &Env) -> bool {
    env.storage().instance().has(&LedgerKey::Roles)
}

pub fn get_roles(env: &Env) -> Option<LedgerRoles> {
    env.storage().instance().get(&LedgerKey::Roles)
}

pub fn set_roles(env: &Env, roles: &LedgerRoles) {
    env.storage().instance().set(&LedgerKey::Roles, roles);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = LedgerKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = LedgerKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&LedgerKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&LedgerKey::TotalSupply, &amount);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

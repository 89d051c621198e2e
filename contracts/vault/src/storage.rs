use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct VaultStorage {
    pub token: Address,
    /// The only account allowed to call `lend` and `repay`.
    pub bridge: Address,
    /// Liquidity that can be lent right now. Never negative.
    pub available: i128,
    /// Principal lent to the bridge and not yet repaid.
    pub outstanding: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Vault,
}

pub fn get_vault_storage(env: &Env) -> Option<VaultStorage> {
    env.storage().instance().get(&DataKey::Vault)
}

pub fn set_vault_storage(env: &Env, storage: &VaultStorage) {
    env.storage().instance().set(&DataKey::Vault, storage);
}

pub fn has_vault_storage(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Vault)
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

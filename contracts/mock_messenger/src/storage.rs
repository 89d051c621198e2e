use flashbridge_messenger_interface::Envelope;
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct MessengerConfig {
    pub domain: u32,
    pub relayer: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    MessageCount,
    Outbox(u64),
}

pub fn get_config(env: &Env) -> Option<MessengerConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &MessengerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_message_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::MessageCount).unwrap_or(0)
}

pub fn set_message_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::MessageCount, &count);
}

pub fn get_envelope(env: &Env, id: u64) -> Option<Envelope> {
    env.storage().persistent().get(&DataKey::Outbox(id))
}

pub fn set_envelope(env: &Env, envelope: &Envelope) {
    let key = DataKey::Outbox(envelope.id);
    env.storage().persistent().set(&key, envelope);
    env.storage()
        .persistent()
        .extend_ttl(&key, INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

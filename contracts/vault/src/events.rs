use soroban_sdk::{symbol_short, Address, Env};

pub struct VaultEvents;

impl VaultEvents {
    /// Topics: `("deposit", from)`
    /// Data:   `(amount, available)`
    pub fn deposit(env: &Env, from: &Address, amount: i128, available: i128) {
        env.events().publish((symbol_short!("deposit"), from.clone()), (amount, available));
    }

    /// Topics: `("lend", bridge)`
    /// Data:   `(amount, available)`
    pub fn lend(env: &Env, bridge: &Address, amount: i128, available: i128) {
        env.events().publish((symbol_short!("lend"), bridge.clone()), (amount, available));
    }

    /// Topics: `("repay", bridge)`
    /// Data:   `(amount, available)`
    pub fn repay(env: &Env, bridge: &Address, amount: i128, available: i128) {
        env.events().publish((symbol_short!("repay"), bridge.clone()), (amount, available));
    }
}

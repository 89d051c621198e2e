use soroban_sdk::{symbol_short, Address, Env};

pub struct MessengerEvents;

impl MessengerEvents {
    /// Topics: `("sent", id)`
    /// Data:   `(destination_domain, recipient)`
    pub fn sent(env: &Env, id: u64, destination_domain: u32, recipient: &Address) {
        env.events()
            .publish((symbol_short!("sent"), id), (destination_domain, recipient.clone()));
    }

    /// Topics: `("delivered", id)`
    /// Data:   `source_domain`
    pub fn delivered(env: &Env, id: u64, source_domain: u32) {
        env.events().publish((symbol_short!("delivered"), id), source_domain);
    }
}

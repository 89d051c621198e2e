use soroban_sdk::{symbol_short, Address, Env};

/// Cross-domain supply events. Plain mint/burn/transfer use the SEP-41
/// events from `soroban_token_sdk`.
pub struct LedgerEvents;

impl LedgerEvents {
    /// Topics: `("xmint", to)`
    /// Data:   `(amount, source_domain)`
    pub fn crosschain_mint(env: &Env, to: &Address, amount: i128, source_domain: u32) {
        env.events()
            .publish((symbol_short!("xmint"), to.clone()), (amount, source_domain));
    }

    /// Topics: `("xburn", from)`
    /// Data:   `(amount, destination_domain)`
    pub fn crosschain_burn(env: &Env, from: &Address, amount: i128, destination_domain: u32) {
        env.events()
            .publish((symbol_short!("xburn"), from.clone()), (amount, destination_domain));
    }
}

#![no_std]

use flashbridge_flash_target_interface::FlashTarget;
use soroban_sdk::{
    contract, contractimpl, contracttype, token::TokenClient, Address, Bytes, Env,
};

#[contracttype]
pub enum DataKey {
    Value,
    Calls,
}

#[contract]
pub struct MockFlashTarget;

#[contractimpl]
impl MockFlashTarget {
    /// Token balance observed during the most recent callback.
    pub fn value(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::Value).unwrap_or(0)
    }

    pub fn calls(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Calls).unwrap_or(0)
    }
}

#[contractimpl]
impl FlashTarget for MockFlashTarget {
    fn on_flash_loan(env: Env, initiator: Address, token: Address, amount: i128, data: Bytes) {
        let me = env.current_contract_address();
        let token_client = TokenClient::new(&env, &token);

        let observed = token_client.balance(&me);
        env.storage().instance().set(&DataKey::Value, &observed);
        let calls = Self::calls(env.clone());
        env.storage().instance().set(&DataKey::Calls, &(calls + 1));

        if data == Bytes::from_slice(&env, b"repay") {
            token_client.transfer(&me, &initiator, &amount);
        } else if data == Bytes::from_slice(&env, b"partial") {
            token_client.transfer(&me, &initiator, &(amount - 1));
        } else if data == Bytes::from_slice(&env, b"revert") {
            panic!("target reverted");
        }
        // "keep" and anything else: hold on to the principal.
    }
}

use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

use crate::{errors::BridgeError, storage::LoanState};

pub struct BridgeEvents;

impl BridgeEvents {
    /// Emits an `initiated` event when a loan is accepted on the source.
    ///
    /// Topics: `("initiated", loan_id)`
    /// Data:   `(borrower, destination_domain, amount, fee)`
    pub fn initiated(
        env: &Env,
        loan_id: &BytesN<32>,
        borrower: &Address,
        destination_domain: u32,
        amount: i128,
        fee: i128,
    ) {
        env.events().publish(
            (symbol_short!("initiated"), loan_id.clone()),
            (borrower.clone(), destination_domain, amount, fee),
        );
    }

    /// Topics: `("transition", loan_id)`
    /// Data:   `(from, to)`
    ///
    /// "transition" is 10 chars, over the `symbol_short!` limit.
    pub fn transition(env: &Env, loan_id: &BytesN<32>, from: LoanState, to: LoanState) {
        env.events()
            .publish((Symbol::new(env, "transition"), loan_id.clone()), (from, to));
    }

    /// Topics: `("msg_sent", loan_id)`
    /// Data:   `(destination_domain, message_id)`
    pub fn message_sent(env: &Env, loan_id: &BytesN<32>, destination_domain: u32, message_id: u64) {
        env.events().publish(
            (symbol_short!("msg_sent"), loan_id.clone()),
            (destination_domain, message_id),
        );
    }

    /// Topics: `("loan_failed", loan_id)`
    /// Data:   error code
    pub fn loan_failed(env: &Env, loan_id: &BytesN<32>, reason: BridgeError) {
        env.events()
            .publish((Symbol::new(env, "loan_failed"), loan_id.clone()), reason as u32);
    }

    /// Topics: `("settled", loan_id)`
    /// Data:   `amount`
    pub fn settled(env: &Env, loan_id: &BytesN<32>, amount: i128) {
        env.events().publish((symbol_short!("settled"), loan_id.clone()), amount);
    }

    /// Topics: `("fees_withdrawn", owner)`
    /// Data:   `amount`
    pub fn fees_withdrawn(env: &Env, owner: &Address, amount: i128) {
        env.events()
            .publish((Symbol::new(env, "fees_withdrawn"), owner.clone()), amount);
    }
}

#![no_std]

mod errors;
mod events;
mod execution;
mod fees;
mod helpers;
mod initiate;
mod loan;
mod message;
mod reentrancy;
mod settlement;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; bridge is no_std so we must opt-in explicitly.


pub use errors::BridgeError;
pub use initiate::MAX_CALL_DATA_SIZE;
pub use message::{BridgeMessage, ExecutionRequest, RepaymentNotice};
pub use storage::{BridgeConfig, Loan, LoanState};

use flashbridge_messenger_interface::MessengerClient;
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Map};

#[contract]
pub struct Bridge;

#[contractimpl]
impl Bridge {
    /// Fixes the bridge configuration for its whole lifetime. The local
    /// domain is taken from `messenger`; `inbox` must report the same one.
    pub fn initialize(
        env: Env,
        token: Address,
        vault: Address,
        messenger: Address,
        inbox: Address,
        fee_token: Address,
        flat_fee: i128,
        owner: Address,
        counterparts: Map<u32, Address>,
    ) -> Result<(), BridgeError> {
        if storage::has_config(&env) {
            return Err(BridgeError::AlreadyInitialized);
        }
        if flat_fee < 0 {
            return Err(BridgeError::InvalidAmount);
        }

        let domain = MessengerClient::new(&env, &messenger).domain();
        if MessengerClient::new(&env, &inbox).domain() != domain {
            return Err(BridgeError::UnknownDomain);
        }
        if counterparts.contains_key(domain) {
            return Err(BridgeError::UnknownDomain);
        }

        storage::set_config(
            &env,
            &BridgeConfig {
                domain,
                token,
                vault,
                messenger,
                inbox,
                fee_token,
                flat_fee,
                owner,
                counterparts,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Borrows `amount` from the local vault and runs it against `target`
    /// on `destination_domain`. Returns the loan id.
    pub fn initiate_crosschain_flash_loan(
        env: Env,
        caller: Address,
        destination_domain: u32,
        amount: i128,
        target: Address,
        call_data: Bytes,
        fee_payment: i128,
    ) -> Result<BytesN<32>, BridgeError> {
        initiate::initiate_loan(
            &env,
            &caller,
            destination_domain,
            amount,
            &target,
            &call_data,
            fee_payment,
        )
    }

    /// Delivery entry point for the inbound messenger. Handles both execution
    /// requests (destination side) and repayment notices (source side).
    pub fn on_message(
        env: Env,
        caller: Address,
        source_domain: u32,
        sender: Address,
        payload: Bytes,
    ) -> Result<(), BridgeError> {
        let config = storage::get_config(&env).ok_or(BridgeError::NotInitialized)?;
        if caller != config.inbox {
            return Err(BridgeError::UntrustedCaller);
        }
        caller.require_auth();

        let counterpart = config
            .counterparts
            .get(source_domain)
            .ok_or(BridgeError::UnknownDomain)?;
        if sender != counterpart {
            return Err(BridgeError::UntrustedCaller);
        }

        match message::decode(&env, &payload)? {
            BridgeMessage::Execute(request) => {
                execution::execute_loan(&env, &config, source_domain, &sender, request)?
            }
            BridgeMessage::Repay(notice) => {
                settlement::settle_loan(&env, &config, source_domain, notice)?
            }
        };

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn withdraw_fees(env: Env, caller: Address) -> Result<i128, BridgeError> {
        fees::withdraw_fees(&env, &caller)
    }

    pub fn config(env: Env) -> Option<BridgeConfig> {
        storage::get_config(&env)
    }

    pub fn loan(env: Env, loan_id: BytesN<32>) -> Option<Loan> {
        storage::get_loan(&env, &loan_id)
    }

    pub fn loan_state(env: Env, loan_id: BytesN<32>) -> Option<LoanState> {
        storage::get_loan(&env, &loan_id).map(|l| l.state)
    }

    pub fn accrued_fees(env: Env) -> i128 {
        storage::get_accrued_fees(&env)
    }

    pub fn forfeited_fees(env: Env) -> i128 {
        storage::get_forfeited_fees(&env)
    }

    pub fn flat_fee(env: Env) -> Result<i128, BridgeError> {
        storage::get_config(&env)
            .map(|c| c.flat_fee)
            .ok_or(BridgeError::NotInitialized)
    }

    pub fn domain(env: Env) -> Result<u32, BridgeError> {
        storage::get_config(&env)
            .map(|c| c.domain)
            .ok_or(BridgeError::NotInitialized)
    }

    pub fn next_nonce(env: Env) -> u64 {
        storage::get_nonce(&env)
    }

    pub fn compute_loan_id(
        env: Env,
        source_domain: u32,
        destination_domain: u32,
        nonce: u64,
    ) -> BytesN<32> {
        helpers::derive_loan_id(&env, source_domain, destination_domain, nonce)
    }
}

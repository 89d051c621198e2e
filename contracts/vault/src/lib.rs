#![no_std]

mod errors;
mod events;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::VaultError;
use events::VaultEvents;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use storage::VaultStorage;

/// Per-domain escrow backing flash loans.
///
/// Anyone may `deposit` liquidity. Only the registered bridge can move the
/// `available` counter down (`lend`) or back up (`repay`), and each of those
/// is a single atomic adjustment within one invocation.
#[contract]
pub struct Vault;

fn load(env: &Env) -> Result<VaultStorage, VaultError> {
    storage::get_vault_storage(env).ok_or(VaultError::NotInitialized)
}

fn require_bridge(state: &VaultStorage, caller: &Address) -> Result<(), VaultError> {
    if *caller != state.bridge {
        return Err(VaultError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

#[contractimpl]
impl Vault {
    pub fn initialize(env: Env, token: Address, bridge: Address) -> Result<(), VaultError> {
        if storage::has_vault_storage(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        storage::set_vault_storage(
            &env,
            &VaultStorage { token, bridge, available: 0, outstanding: 0 },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Adds `amount` of the vault token to lendable liquidity.
    /// Returns the resulting `available`.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, VaultError> {
        from.require_auth();
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        let mut state = load(&env)?;

        let vault = env.current_contract_address();
        TokenClient::new(&env, &state.token).transfer(&from, &vault, &amount);

        state.available = state.available.checked_add(amount).ok_or(VaultError::Overflow)?;
        storage::set_vault_storage(&env, &state);
        storage::extend_instance_ttl(&env);

        VaultEvents::deposit(&env, &from, amount, state.available);
        Ok(state.available)
    }

    /// Sends `amount` of principal to the bridge.
    ///
    /// # Errors
    /// | Error                   | Condition                              |
    /// |-------------------------|----------------------------------------|
    /// | `Unauthorized`          | `caller` is not the registered bridge  |
    /// | `InvalidAmount`         | `amount <= 0`                          |
    /// | `InsufficientLiquidity` | `available < amount`                   |
    pub fn lend(env: Env, caller: Address, amount: i128) -> Result<i128, VaultError> {
        let mut state = load(&env)?;
        require_bridge(&state, &caller)?;
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        if state.available < amount {
            return Err(VaultError::InsufficientLiquidity);
        }

        state.available -= amount;
        state.outstanding = state.outstanding.checked_add(amount).ok_or(VaultError::Overflow)?;
        storage::set_vault_storage(&env, &state);
        storage::extend_instance_ttl(&env);

        let vault = env.current_contract_address();
        TokenClient::new(&env, &state.token).transfer(&vault, &caller, &amount);

        VaultEvents::lend(&env, &caller, amount, state.available);
        Ok(amount)
    }

    /// Books `amount` of returned principal. The bridge transfers the tokens
    /// to the vault before calling; the vault only checks it holds them.
    ///
    /// # Errors
    /// | Error                  | Condition                                   |
    /// |------------------------|---------------------------------------------|
    /// | `Unauthorized`         | `caller` is not the registered bridge       |
    /// | `InvalidAmount`        | `amount <= 0`                               |
    /// | `ExcessRepayment`      | `amount > outstanding`                      |
    /// | `RepaymentNotReceived` | vault balance `< available + amount`        |
    pub fn repay(env: Env, caller: Address, amount: i128) -> Result<i128, VaultError> {
        let mut state = load(&env)?;
        require_bridge(&state, &caller)?;
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        if amount > state.outstanding {
            return Err(VaultError::ExcessRepayment);
        }

        let new_available = state.available.checked_add(amount).ok_or(VaultError::Overflow)?;
        let held = TokenClient::new(&env, &state.token).balance(&env.current_contract_address());
        if held < new_available {
            return Err(VaultError::RepaymentNotReceived);
        }

        state.available = new_available;
        state.outstanding -= amount;
        storage::set_vault_storage(&env, &state);
        storage::extend_instance_ttl(&env);

        VaultEvents::repay(&env, &caller, amount, state.available);
        Ok(state.available)
    }

    pub fn available(env: Env) -> i128 {
        storage::get_vault_storage(&env).map(|s| s.available).unwrap_or(0)
    }

    pub fn outstanding(env: Env) -> i128 {
        storage::get_vault_storage(&env).map(|s| s.outstanding).unwrap_or(0)
    }

    pub fn token(env: Env) -> Option<Address> {
        storage::get_vault_storage(&env).map(|s| s.token)
    }

    pub fn bridge(env: Env) -> Option<Address> {
        storage::get_vault_storage(&env).map(|s| s.bridge)
    }
}

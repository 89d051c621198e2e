#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;


pub use errors::LedgerError;
use events::LedgerEvents;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use storage::LedgerRoles;

#[contract]
pub struct Ledger;

fn check_amount(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

fn roles(env: &Env) -> Result<LedgerRoles, LedgerError> {
    storage::get_roles(env).ok_or(LedgerError::NotInitialized)
}

fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), LedgerError> {
    let balance = storage::get_balance(env, id)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    storage::set_balance(env, id, balance);
    Ok(())
}

fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), LedgerError> {
    let balance = storage::get_balance(env, id);
    if balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    storage::set_balance(env, id, balance - amount);
    Ok(())
}

fn increase_supply(env: &Env, amount: i128) -> Result<(), LedgerError> {
    let supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    storage::set_total_supply(env, supply);
    Ok(())
}

fn decrease_supply(env: &Env, amount: i128) -> Result<(), LedgerError> {
    let supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(LedgerError::Overflow)?;
    storage::set_total_supply(env, supply);
    Ok(())
}

#[contractimpl]
impl Ledger {
    pub fn initialize(
        env: Env,
        owner: Address,
        crosschain_minter: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), LedgerError> {
        if storage::has_roles(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        storage::set_roles(&env, &LedgerRoles { owner, crosschain_minter });
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: decimals,
            name,
            symbol,
        });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        check_amount(amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;
        storage::extend_instance_ttl(&env);
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    /// Owner-gated issuance.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), LedgerError> {
        let roles = roles(&env)?;
        roles.owner.require_auth();
        check_amount(amount)?;
        receive_balance(&env, &to, amount)?;
        increase_supply(&env, amount)?;
        storage::extend_instance_ttl(&env);
        TokenUtils::new(&env).events().mint(roles.owner, to, amount);
        Ok(())
    }

    /// Owner-gated destruction of `amount` held by `from`.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        let roles = roles(&env)?;
        roles.owner.require_auth();
        check_amount(amount)?;
        spend_balance(&env, &from, amount)?;
        decrease_supply(&env, amount)?;
        storage::extend_instance_ttl(&env);
        TokenUtils::new(&env).events().burn(from, amount);
        Ok(())
    }

    /// Credits `amount` that left `source_domain` through a matching
    /// `crosschain_burn` over there.
    pub fn crosschain_mint(
        env: Env,
        to: Address,
        amount: i128,
        source_domain: u32,
    ) -> Result<(), LedgerError> {
        let roles = roles(&env)?;
        roles.crosschain_minter.require_auth();
        check_amount(amount)?;
        receive_balance(&env, &to, amount)?;
        increase_supply(&env, amount)?;
        storage::extend_instance_ttl(&env);
        LedgerEvents::crosschain_mint(&env, &to, amount, source_domain);
        Ok(())
    }

    /// Removes `amount` from the minter's own balance ahead of its transfer
    /// to `destination_domain`.
    pub fn crosschain_burn(
        env: Env,
        from: Address,
        amount: i128,
        destination_domain: u32,
    ) -> Result<(), LedgerError> {
        let roles = roles(&env)?;
        if from != roles.crosschain_minter {
            return Err(LedgerError::Unauthorized);
        }
        from.require_auth();
        check_amount(amount)?;
        spend_balance(&env, &from, amount)?;
        decrease_supply(&env, amount)?;
        storage::extend_instance_ttl(&env);
        LedgerEvents::crosschain_burn(&env, &from, amount, destination_domain);
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_roles(&env).map(|r| r.owner)
    }

    pub fn crosschain_minter(env: Env) -> Option<Address> {
        storage::get_roles(&env).map(|r| r.crosschain_minter)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}

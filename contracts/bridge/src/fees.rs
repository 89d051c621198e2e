use soroban_sdk::{token::TokenClient, Address, Env};

use crate::{errors::BridgeError, events::BridgeEvents, storage};

/// Sends every collected fee (accrued flat fees plus forfeited surplus) to
/// the owner and zeroes both counters. Returns the amount sent.
pub fn withdraw_fees(env: &Env, caller: &Address) -> Result<i128, BridgeError> {
    let config = storage::get_config(env).ok_or(BridgeError::NotInitialized)?;
    if *caller != config.owner {
        return Err(BridgeError::Unauthorized);
    }
    caller.require_auth();

    let total = storage::get_accrued_fees(env)
        .checked_add(storage::get_forfeited_fees(env))
        .ok_or(BridgeError::Overflow)?;

    storage::set_accrued_fees(env, 0);
    storage::set_forfeited_fees(env, 0);

    if total > 0 {
        TokenClient::new(env, &config.fee_token).transfer(
            &env.current_contract_address(),
            caller,
            &total,
        );
    }

    BridgeEvents::fees_withdrawn(env, caller, total);
    Ok(total)
}

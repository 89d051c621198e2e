use soroban_sdk::Env;

use crate::{
    errors::BridgeError,
    storage::{get_reentrancy_guard, set_reentrancy_guard, ReentrancyGuard},
};

/// Acquires the execution lock. Reverts with `Locked` if already held.
///
/// Held while the destination target runs. Soroban rolls back all state
/// on a failed invocation, so an outer revert clears the lock as well.
pub fn acquire(env: &Env) -> Result<(), BridgeError> {
    let guard = get_reentrancy_guard(env);
    if guard.locked {
        return Err(BridgeError::Locked);
    }
    set_reentrancy_guard(env, &ReentrancyGuard { locked: true });
    Ok(())
}

/// Releases the execution lock once the target has returned.
pub fn release(env: &Env) {
    set_reentrancy_guard(env, &ReentrancyGuard { locked: false });
}

pub fn is_locked(env: &Env) -> bool {
    get_reentrancy_guard(env).locked
}

use flashbridge_messenger_interface::MessengerClient;
use soroban_sdk::{token::TokenClient, Address, Bytes, BytesN, Env};

use crate::{
    errors::BridgeError,
    events::BridgeEvents,
    helpers::{derive_loan_id, LedgerClient, VaultClient},
    loan,
    message::{self, BridgeMessage, ExecutionRequest},
    reentrancy,
    storage::{self, Loan, LoanState},
};

/// Maximum byte length of the `call_data` forwarded to the target.
pub const MAX_CALL_DATA_SIZE: u32 = 512;

/// Accepts a loan on the source domain and dispatches it to
/// `destination_domain`.
///
/// # Flow
/// 1. **Pre-flight checks**: amount, payload size (no storage access).
/// 2. **Config and preconditions**: fee, reachable domain, liquidity.
/// 3. **Record** the loan as `Initiated` under a fresh nonce.
/// 4. **Fee**: pull `fee_payment`; `flat_fee` accrues, any surplus is
///    forfeited.
/// 5. **Principal**: `Vault.lend`, then burn it here through the ledger's
///    cross-domain burn; the destination mints it back on delivery.
/// 6. **Dispatch** the `Execute` message and move to
///    `DispatchedToDestination`.
///
/// Every step runs inside the caller's invocation, so any `Err` rolls back
/// the loan record, the fee and the vault debit together and no message is
/// sent.
///
/// # Errors
/// | Error                   | Condition                                         |
/// |-------------------------|---------------------------------------------------|
/// | `InvalidAmount`         | `amount <= 0`                                     |
/// | `PayloadTooLarge`       | `call_data.len() > MAX_CALL_DATA_SIZE`            |
/// | `NotInitialized`        | bridge has no config                              |
/// | `Locked`                | called from inside a destination target callback  |
/// | `InsufficientFee`       | `fee_payment < flat_fee`                          |
/// | `UnknownDomain`         | no counterpart for `destination_domain`, or local |
/// | `InsufficientLiquidity` | vault `available < amount`                        |
pub fn initiate_loan(
    env: &Env,
    caller: &Address,
    destination_domain: u32,
    amount: i128,
    target: &Address,
    call_data: &Bytes,
    fee_payment: i128,
) -> Result<BytesN<32>, BridgeError> {
    // -----------------------------------------------------------------------
    // 1. Pre-flight checks (no state access)
    // -----------------------------------------------------------------------

    if amount <= 0 {
        return Err(BridgeError::InvalidAmount);
    }
    if call_data.len() > MAX_CALL_DATA_SIZE {
        return Err(BridgeError::PayloadTooLarge);
    }

    // -----------------------------------------------------------------------
    // 2. Config and preconditions
    // -----------------------------------------------------------------------

    let config = storage::get_config(env).ok_or(BridgeError::NotInitialized)?;
    // A target running on this domain may not open a new loan mid-callback.
    if reentrancy::is_locked(env) {
        return Err(BridgeError::Locked);
    }
    caller.require_auth();

    if fee_payment < config.flat_fee || fee_payment < 0 {
        return Err(BridgeError::InsufficientFee);
    }
    if destination_domain == config.domain {
        return Err(BridgeError::UnknownDomain);
    }
    let counterpart = config
        .counterparts
        .get(destination_domain)
        .ok_or(BridgeError::UnknownDomain)?;

    let vault = VaultClient::new(env, &config.vault);
    if vault.available() < amount {
        return Err(BridgeError::InsufficientLiquidity);
    }

    // -----------------------------------------------------------------------
    // 3. Record the loan
    // -----------------------------------------------------------------------

    let nonce = storage::take_nonce(env)?;
    let loan_id = derive_loan_id(env, config.domain, destination_domain, nonce);

    let mut loan = Loan {
        loan_id: loan_id.clone(),
        source_domain: config.domain,
        destination_domain,
        nonce,
        amount,
        borrower: caller.clone(),
        target: target.clone(),
        call_data: call_data.clone(),
        fee: config.flat_fee,
        state: LoanState::Initiated,
        updated_ledger: env.ledger().sequence(),
    };
    storage::set_loan(env, &loan);
    BridgeEvents::initiated(env, &loan_id, caller, destination_domain, amount, config.flat_fee);

    // -----------------------------------------------------------------------
    // 4. Fee
    // -----------------------------------------------------------------------

    let bridge = env.current_contract_address();
    if fee_payment > 0 {
        TokenClient::new(env, &config.fee_token).transfer(caller, &bridge, &fee_payment);
    }

    let accrued = storage::get_accrued_fees(env)
        .checked_add(config.flat_fee)
        .ok_or(BridgeError::Overflow)?;
    storage::set_accrued_fees(env, accrued);

    let surplus = fee_payment - config.flat_fee;
    if surplus > 0 {
        let forfeited = storage::get_forfeited_fees(env)
            .checked_add(surplus)
            .ok_or(BridgeError::Overflow)?;
        storage::set_forfeited_fees(env, forfeited);
    }

    // -----------------------------------------------------------------------
    // 5. Principal
    // -----------------------------------------------------------------------

    vault.lend(&bridge, &amount);
    LedgerClient::new(env, &config.token).crosschain_burn(&bridge, &amount, &destination_domain);

    // -----------------------------------------------------------------------
    // 6. Dispatch
    // -----------------------------------------------------------------------

    let payload = message::encode(
        env,
        &BridgeMessage::Execute(ExecutionRequest {
            loan_id: loan_id.clone(),
            nonce,
            amount,
            borrower: caller.clone(),
            target: target.clone(),
            call_data: call_data.clone(),
            destination_domain,
            return_domain: config.domain,
        }),
    );
    let message_id = MessengerClient::new(env, &config.messenger).send(
        &bridge,
        &destination_domain,
        &counterpart,
        &payload,
    );
    BridgeEvents::message_sent(env, &loan_id, destination_domain, message_id);

    loan::advance(env, &mut loan, LoanState::DispatchedToDestination)?;
    storage::extend_instance_ttl(env);

    Ok(loan_id)
}

use flashbridge_flash_target_interface::FlashTargetClient;
use flashbridge_messenger_interface::MessengerClient;
use soroban_sdk::{token::TokenClient, Address, Env};

use crate::{
    errors::BridgeError,
    events::BridgeEvents,
    helpers::{derive_loan_id, LedgerClient},
    loan,
    message::{self, BridgeMessage, ExecutionRequest, RepaymentNotice},
    reentrancy,
    storage::{self, BridgeConfig, Loan, LoanState},
};

/// Runs a delivered `Execute` request on the destination domain.
///
/// `source_domain` and `sender` have already been authenticated against the
/// trusted messenger and the configured counterpart.
///
/// # Flow
/// 1. **Payload checks**: declared origin, local domain, loan id.
/// 2. **Idempotency**: a loan id seen before is a `DuplicateMessage`.
/// 3. **Record** the loan at `DispatchedToDestination`.
/// 4. **Lend locally**: mint the principal through the ledger's
///    cross-domain mint and transfer it to the target.
/// 5. **Callback**: `target.on_flash_loan(...)` through the fallible client,
///    under the reentrancy lock.
/// 6. **Post-check**: the bridge balance must be back to its pre-transfer
///    value. Otherwise the loan is `Failed` and nothing is sent back.
/// 7. **Repayment**: burn the principal, move to `ExecutedAtDestination`,
///    send the `Repay` notice, move to `RepaymentDispatched`.
///
/// A failed target is not an `Err`: the `Failed` record has to survive the
/// invocation so dispute tooling can find it.
pub fn execute_loan(
    env: &Env,
    config: &BridgeConfig,
    source_domain: u32,
    sender: &Address,
    request: ExecutionRequest,
) -> Result<LoanState, BridgeError> {
    // -----------------------------------------------------------------------
    // 1. Payload checks
    // -----------------------------------------------------------------------

    if request.return_domain != source_domain {
        return Err(BridgeError::UntrustedCaller);
    }
    if request.destination_domain != config.domain {
        return Err(BridgeError::UnknownDomain);
    }
    let expected_id =
        derive_loan_id(env, request.return_domain, request.destination_domain, request.nonce);
    if expected_id != request.loan_id || request.amount <= 0 {
        return Err(BridgeError::MalformedPayload);
    }

    // -----------------------------------------------------------------------
    // 2. Idempotency
    // -----------------------------------------------------------------------

    if storage::has_loan(env, &request.loan_id) {
        return Err(BridgeError::DuplicateMessage);
    }

    // -----------------------------------------------------------------------
    // 3. Record
    // -----------------------------------------------------------------------

    let mut loan = Loan {
        loan_id: request.loan_id,
        source_domain: request.return_domain,
        destination_domain: request.destination_domain,
        nonce: request.nonce,
        amount: request.amount,
        borrower: request.borrower,
        target: request.target,
        call_data: request.call_data,
        fee: 0,
        state: LoanState::DispatchedToDestination,
        updated_ledger: env.ledger().sequence(),
    };
    storage::set_loan(env, &loan);

    // -----------------------------------------------------------------------
    // 4. Lend locally
    // -----------------------------------------------------------------------

    reentrancy::acquire(env)?;

    let bridge = env.current_contract_address();
    let ledger = LedgerClient::new(env, &config.token);
    let token = TokenClient::new(env, &config.token);

    ledger.crosschain_mint(&bridge, &loan.amount, &source_domain);
    let balance_before = token.balance(&bridge);
    token.transfer(&bridge, &loan.target, &loan.amount);

    // -----------------------------------------------------------------------
    // 5. Callback
    // -----------------------------------------------------------------------

    let outcome = FlashTargetClient::new(env, &loan.target).try_on_flash_loan(
        &bridge,
        &config.token,
        &loan.amount,
        &loan.call_data,
    );

    // -----------------------------------------------------------------------
    // 6. Post-check
    // -----------------------------------------------------------------------

    let recovered = token.balance(&bridge) >= balance_before;
    reentrancy::release(env);

    if !matches!(outcome, Ok(Ok(()))) || !recovered {
        loan::advance(env, &mut loan, LoanState::Failed)?;
        BridgeEvents::loan_failed(env, &loan.loan_id, BridgeError::TargetExecutionFailed);
        return Ok(loan.state);
    }

    // -----------------------------------------------------------------------
    // 7. Repayment
    // -----------------------------------------------------------------------

    ledger.crosschain_burn(&bridge, &loan.amount, &source_domain);
    loan::advance(env, &mut loan, LoanState::ExecutedAtDestination)?;

    let payload = message::encode(
        env,
        &BridgeMessage::Repay(RepaymentNotice {
            loan_id: loan.loan_id.clone(),
            amount: loan.amount,
            origin_domain: config.domain,
        }),
    );
    let message_id =
        MessengerClient::new(env, &config.messenger).send(&bridge, &source_domain, sender, &payload);
    BridgeEvents::message_sent(env, &loan.loan_id, source_domain, message_id);

    loan::advance(env, &mut loan, LoanState::RepaymentDispatched)?;
    Ok(loan.state)
}

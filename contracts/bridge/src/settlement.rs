use soroban_sdk::{token::TokenClient, Env};

use crate::{
    errors::BridgeError,
    events::BridgeEvents,
    helpers::{LedgerClient, VaultClient},
    loan,
    message::RepaymentNotice,
    storage::{self, BridgeConfig, LoanState},
};

/// Settles a loan on the source domain once its `Repay` notice arrives.
///
/// The notice is only ever built by the destination handler after the
/// target returned the principal, so its arrival attests both
/// `ExecutedAtDestination` and `RepaymentDispatched`. The local record is
/// walked through those states before the vault is repaid.
///
/// # Errors
/// | Error              | Condition                                               |
/// |--------------------|---------------------------------------------------------|
/// | `UntrustedCaller`  | notice's origin differs from the delivering domain      |
/// | `LoanNotFound`     | no local record for `loan_id`                           |
/// | `DuplicateMessage` | loan already `Settled`                                  |
/// | `InvalidLoanState` | loan not ours, routed elsewhere, failed, or wrong amount|
pub fn settle_loan(
    env: &Env,
    config: &BridgeConfig,
    source_domain: u32,
    notice: RepaymentNotice,
) -> Result<LoanState, BridgeError> {
    if notice.origin_domain != source_domain {
        return Err(BridgeError::UntrustedCaller);
    }

    let mut loan = storage::get_loan(env, &notice.loan_id).ok_or(BridgeError::LoanNotFound)?;
    if loan.state == LoanState::Settled {
        return Err(BridgeError::DuplicateMessage);
    }
    if loan.source_domain != config.domain
        || loan.destination_domain != source_domain
        || loan.amount != notice.amount
    {
        return Err(BridgeError::InvalidLoanState);
    }

    if loan.state == LoanState::DispatchedToDestination {
        loan::advance(env, &mut loan, LoanState::ExecutedAtDestination)?;
    }
    if loan.state == LoanState::ExecutedAtDestination {
        loan::advance(env, &mut loan, LoanState::RepaymentDispatched)?;
    }
    if loan.state != LoanState::RepaymentDispatched {
        return Err(BridgeError::InvalidLoanState);
    }

    let bridge = env.current_contract_address();
    LedgerClient::new(env, &config.token).crosschain_mint(&bridge, &loan.amount, &source_domain);
    TokenClient::new(env, &config.token).transfer(&bridge, &config.vault, &loan.amount);
    VaultClient::new(env, &config.vault).repay(&bridge, &loan.amount);

    loan::advance(env, &mut loan, LoanState::Settled)?;
    BridgeEvents::settled(env, &loan.loan_id, loan.amount);
    Ok(loan.state)
}

use soroban_sdk::Env;

use crate::{
    errors::BridgeError,
    events::BridgeEvents,
    storage::{self, Loan, LoanState},
};

impl LoanState {
    /// The state that follows `self` on the happy path.
    pub fn successor(self) -> Option<LoanState> {
        match self {
            LoanState::Initiated => Some(LoanState::DispatchedToDestination),
            LoanState::DispatchedToDestination => Some(LoanState::ExecutedAtDestination),
            LoanState::ExecutedAtDestination => Some(LoanState::RepaymentDispatched),
            LoanState::RepaymentDispatched => Some(LoanState::Settled),
            LoanState::Settled | LoanState::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, LoanState::Settled | LoanState::Failed)
    }

    /// Only the direct successor, or `Failed` from a non-terminal state.
    pub fn can_advance_to(self, next: LoanState) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == LoanState::Failed || self.successor() == Some(next)
    }
}

/// Moves `loan` to `next`, persists it and publishes the transition.
pub fn advance(env: &Env, loan: &mut Loan, next: LoanState) -> Result<(), BridgeError> {
    if !loan.state.can_advance_to(next) {
        return Err(BridgeError::InvalidLoanState);
    }
    let from = loan.state;
    loan.state = next;
    loan.updated_ledger = env.ledger().sequence();
    storage::set_loan(env, loan);
    BridgeEvents::transition(env, &loan.loan_id, from, next);
    Ok(())
}

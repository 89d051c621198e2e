use soroban_sdk::{
    contracttype,
    xdr::{FromXdr, ToXdr},
    Address, Bytes, BytesN, Env,
};

use crate::errors::BridgeError;

/// Source → destination: run the loan.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionRequest {
    pub loan_id: BytesN<32>,
    pub nonce: u64,
    pub amount: i128,
    pub borrower: Address,
    pub target: Address,
    pub call_data: Bytes,
    pub destination_domain: u32,
    /// Domain the loan originated on; repayment goes back here.
    pub return_domain: u32,
}

/// Destination → source: the principal was reclaimed and is on its way.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepaymentNotice {
    pub loan_id: BytesN<32>,
    pub amount: i128,
    /// Domain the loan executed on.
    pub origin_domain: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BridgeMessage {
    Execute(ExecutionRequest),
    Repay(RepaymentNotice),
}

pub fn encode(env: &Env, message: &BridgeMessage) -> Bytes {
    message.clone().to_xdr(env)
}

pub fn decode(env: &Env, payload: &Bytes) -> Result<BridgeMessage, BridgeError> {
    BridgeMessage::from_xdr(env, payload).map_err(|_| BridgeError::MalformedPayload)
}

#![no_std]

use soroban_sdk::{contractclient, contracttype, Address, Bytes, Env};

/// A payload in flight between two domains, as recorded by the sending
/// messenger and replayed by a relayer on the receiving one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    pub id: u64,
    pub source_domain: u32,
    pub destination_domain: u32,
    pub sender: Address,
    pub recipient: Address,
    pub payload: Bytes,
}

/// Cross-domain messenger calling convention.
/// `send` queues `payload` for `recipient` on `destination_domain` and
/// returns the message id. `sender` must authorize the call.
#[contractclient(name = "MessengerClient")]
pub trait Messenger {
    fn send(
        env: Env,
        sender: Address,
        destination_domain: u32,
        recipient: Address,
        payload: Bytes,
    ) -> u64;

    fn domain(env: Env) -> u32;
}

/// Implemented by contracts that accept delivered payloads.
/// `caller` is the messenger performing the delivery; recipients must
/// check it against the messenger they trust before acting on `payload`.
#[contractclient(name = "MessageRecipientClient")]
pub trait MessageRecipient {
    fn on_message(
        env: Env,
        caller: Address,
        source_domain: u32,
        sender: Address,
        payload: Bytes,
    );
}

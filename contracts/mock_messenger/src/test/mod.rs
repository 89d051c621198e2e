#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

use crate::{MessengerError, MockMessenger, MockMessengerClient};

// Recipient stub that counts deliveries and remembers the last caller.
mod recipient_mod {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env};

    #[contracttype]
    pub enum Key {
        Deliveries,
        LastCaller,
    }

    #[contract]
    pub struct CountingRecipient;

    #[contractimpl]
    impl CountingRecipient {
        pub fn on_message(
            env: Env,
            caller: Address,
            _source_domain: u32,
            _sender: Address,
            _payload: Bytes,
        ) {
            let n: u32 = env.storage().instance().get(&Key::Deliveries).unwrap_or(0);
            env.storage().instance().set(&Key::Deliveries, &(n + 1));
            env.storage().instance().set(&Key::LastCaller, &caller);
        }

        pub fn deliveries(env: Env) -> u32 {
            env.storage().instance().get(&Key::Deliveries).unwrap_or(0)
        }

        pub fn last_caller(env: Env) -> Option<Address> {
            env.storage().instance().get(&Key::LastCaller)
        }
    }
}
use recipient_mod::{CountingRecipient, CountingRecipientClient};

const DOMAIN_A: u32 = 901;
const DOMAIN_B: u32 = 902;

fn create_messenger<'a>(env: &Env, domain: u32, relayer: &Address) -> MockMessengerClient<'a> {
    let id = env.register_contract(None, MockMessenger);
    let client = MockMessengerClient::new(env, &id);
    client.initialize(&domain, relayer);
    client
}

#[test]
fn send_records_envelope_and_increments_count() {
    let env = Env::default();
    env.mock_all_auths();
    let relayer = Address::generate(&env);
    let messenger = create_messenger(&env, DOMAIN_A, &relayer);

    let sender = Address::generate(&env);
    let recipient = Address::generate(&env);
    let payload = Bytes::from_slice(&env, b"hello");

    let id = messenger.send(&sender, &DOMAIN_B, &recipient, &payload);
    assert_eq!(id, 0);
    assert_eq!(messenger.message_count(), 1);

    let envelope = messenger.message(&id).unwrap();
    assert_eq!(envelope.source_domain, DOMAIN_A);
    assert_eq!(envelope.destination_domain, DOMAIN_B);
    assert_eq!(envelope.sender, sender);
    assert_eq!(envelope.recipient, recipient);
    assert_eq!(envelope.payload, payload);

    let second = messenger.send(&sender, &DOMAIN_B, &recipient, &payload);
    assert_eq!(second, 1);
}

#[test]
fn send_to_own_domain_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let relayer = Address::generate(&env);
    let messenger = create_messenger(&env, DOMAIN_A, &relayer);

    let result = messenger.try_send(
        &Address::generate(&env),
        &DOMAIN_A,
        &Address::generate(&env),
        &Bytes::new(&env),
    );
    assert_eq!(result, Err(Ok(MessengerError::WrongDomain)));
}

#[test]
fn double_initialize_fails() {
    let env = Env::default();
    let relayer = Address::generate(&env);
    let messenger = create_messenger(&env, DOMAIN_A, &relayer);

    let result = messenger.try_initialize(&DOMAIN_B, &relayer);
    assert_eq!(result, Err(Ok(MessengerError::AlreadyInitialized)));
    assert_eq!(messenger.domain(), DOMAIN_A);
}

#[test]
fn deliver_invokes_recipient_with_messenger_as_caller() {
    let env = Env::default();
    env.mock_all_auths();
    let relayer = Address::generate(&env);
    let messenger_a = create_messenger(&env, DOMAIN_A, &relayer);
    let messenger_b = create_messenger(&env, DOMAIN_B, &relayer);

    let recipient_id = env.register_contract(None, CountingRecipient);
    let recipient = CountingRecipientClient::new(&env, &recipient_id);

    let sender = Address::generate(&env);
    let id = messenger_a.send(&sender, &DOMAIN_B, &recipient_id, &Bytes::from_slice(&env, b"x"));
    let envelope = messenger_a.message(&id).unwrap();

    messenger_b.deliver(&envelope);
    assert_eq!(recipient.deliveries(), 1);
    assert_eq!(recipient.last_caller(), Some(messenger_b.address.clone()));

    // At-least-once: a replay reaches the recipient again.
    messenger_b.deliver(&envelope);
    assert_eq!(recipient.deliveries(), 2);
}

#[test]
fn deliver_on_wrong_domain_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let relayer = Address::generate(&env);
    let messenger_a = create_messenger(&env, DOMAIN_A, &relayer);

    let recipient_id = env.register_contract(None, CountingRecipient);
    let id = messenger_a.send(
        &Address::generate(&env),
        &DOMAIN_B,
        &recipient_id,
        &Bytes::new(&env),
    );
    let envelope = messenger_a.message(&id).unwrap();

    // Submitting the envelope back to its own source messenger.
    let result = messenger_a.try_deliver(&envelope);
    assert_eq!(result, Err(Ok(MessengerError::WrongDomain)));
    assert_eq!(CountingRecipientClient::new(&env, &recipient_id).deliveries(), 0);
}

#[test]
#[should_panic]
fn deliver_requires_relayer_auth() {
    let env = Env::default();
    let relayer = Address::generate(&env);
    let messenger_b = create_messenger(&env, DOMAIN_B, &relayer);
    let recipient_id = env.register_contract(None, CountingRecipient);

    let envelope = flashbridge_messenger_interface::Envelope {
        id: 0,
        source_domain: DOMAIN_A,
        destination_domain: DOMAIN_B,
        sender: Address::generate(&env),
        recipient: recipient_id,
        payload: Bytes::new(&env),
    };
    // No auths mocked: relayer.require_auth() must fail.
    messenger_b.deliver(&envelope);
}

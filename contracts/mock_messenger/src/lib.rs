#![no_std]

mod errors;
mod events;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::MessengerError;
use events::MessengerEvents;
use flashbridge_messenger_interface::{Envelope, MessageRecipientClient};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};
use storage::MessengerConfig;

/// Local stand-in for a pre-deployed cross-domain relay.
///
/// `send` records an outbound envelope on the sending domain. A relayer
/// later reads it with `message` and submits it to the messenger on the
/// destination domain through `deliver`, which calls the recipient's
/// `on_message`. Delivery is at-least-once: nothing stops the relayer from
/// submitting the same envelope twice, so recipients must deduplicate.
#[contract]
pub struct MockMessenger;

#[contractimpl]
impl MockMessenger {
    pub fn initialize(env: Env, domain: u32, relayer: Address) -> Result<(), MessengerError> {
        if storage::has_config(&env) {
            return Err(MessengerError::AlreadyInitialized);
        }
        storage::set_config(&env, &MessengerConfig { domain, relayer });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn send(
        env: Env,
        sender: Address,
        destination_domain: u32,
        recipient: Address,
        payload: Bytes,
    ) -> Result<u64, MessengerError> {
        sender.require_auth();
        let config = storage::get_config(&env).ok_or(MessengerError::NotInitialized)?;
        if destination_domain == config.domain {
            return Err(MessengerError::WrongDomain);
        }

        let id = storage::get_message_count(&env);
        let envelope = Envelope {
            id,
            source_domain: config.domain,
            destination_domain,
            sender,
            recipient: recipient.clone(),
            payload,
        };
        storage::set_envelope(&env, &envelope);
        storage::set_message_count(&env, id + 1);
        storage::extend_instance_ttl(&env);

        MessengerEvents::sent(&env, id, destination_domain, &recipient);
        Ok(id)
    }

    pub fn deliver(env: Env, envelope: Envelope) -> Result<(), MessengerError> {
        let config = storage::get_config(&env).ok_or(MessengerError::NotInitialized)?;
        config.relayer.require_auth();
        if envelope.destination_domain != config.domain {
            return Err(MessengerError::WrongDomain);
        }

        MessageRecipientClient::new(&env, &envelope.recipient).on_message(
            &env.current_contract_address(),
            &envelope.source_domain,
            &envelope.sender,
            &envelope.payload,
        );

        MessengerEvents::delivered(&env, envelope.id, envelope.source_domain);
        Ok(())
    }

    pub fn message(env: Env, id: u64) -> Option<Envelope> {
        storage::get_envelope(&env, id)
    }

    pub fn message_count(env: Env) -> u64 {
        storage::get_message_count(&env)
    }

    pub fn domain(env: Env) -> Result<u32, MessengerError> {
        storage::get_config(&env)
            .map(|c| c.domain)
            .ok_or(MessengerError::NotInitialized)
    }

    pub fn relayer(env: Env) -> Option<Address> {
        storage::get_config(&env).map(|c| c.relayer)
    }
}

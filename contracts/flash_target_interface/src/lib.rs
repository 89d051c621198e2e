#![no_std]

use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Flash Target Interface.
/// Contracts invoked by the bridge on the destination domain must implement
/// this trait. The bridge transfers `amount` of `token` to the target and
/// then calls `on_flash_loan`. The target MUST have returned `amount` to
/// `initiator` by the time the callback returns, otherwise the loan fails.
#[contractclient(name = "FlashTargetClient")]
pub trait FlashTarget {
    fn on_flash_loan(env: Env, initiator: Address, token: Address, amount: i128, data: Bytes);
}

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    fn lend(env: Env, caller: Address, amount: i128) -> i128;
    fn repay(env: Env, caller: Address, amount: i128) -> i128;
    fn available(env: Env) -> i128;
}

/// Local halves of the ledger bridging primitive.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn crosschain_mint(env: Env, to: Address, amount: i128, source_domain: u32);
    fn crosschain_burn(env: Env, from: Address, amount: i128, destination_domain: u32);
}

/// Derives the loan id both domains agree on:
/// `sha256(be(source_domain) || be(destination_domain) || be(nonce))`.
pub fn derive_loan_id(
    env: &Env,
    source_domain: u32,
    destination_domain: u32,
    nonce: u64,
) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.extend_from_array(&source_domain.to_be_bytes());
    preimage.extend_from_array(&destination_domain.to_be_bytes());
    preimage.extend_from_array(&nonce.to_be_bytes());
    env.crypto().sha256(&preimage).to_bytes()
}

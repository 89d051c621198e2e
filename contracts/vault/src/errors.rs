use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    Unauthorized = 502,
    InsufficientLiquidity = 503,
    InvalidAmount = 504,
    ExcessRepayment = 505,
    RepaymentNotReceived = 506,
    Overflow = 507,
}

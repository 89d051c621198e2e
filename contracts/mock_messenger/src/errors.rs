use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MessengerError {
    AlreadyInitialized = 600,
    NotInitialized = 601,
    WrongDomain = 602,
}

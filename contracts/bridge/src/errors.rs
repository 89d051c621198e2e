use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BridgeError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    InsufficientFee = 402,
    InsufficientLiquidity = 403,
    UnknownDomain = 404,
    UntrustedCaller = 405,
    DuplicateMessage = 406,
    InvalidLoanState = 407,
    Unauthorized = 408,
    TargetExecutionFailed = 409,
    InvalidAmount = 410,
    PayloadTooLarge = 411,
    MalformedPayload = 412,
    LoanNotFound = 413,
    Locked = 414,
    Overflow = 415,
}

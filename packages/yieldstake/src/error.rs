use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    InsufficientBalance = 3,
    InsufficientReserveFunds = 4,
    OutOfRange = 5,
    NotYetVested = 6,
    ZeroAddress = 7,
    ZeroAmount = 8,
    Paused = 9,
    /// A reserved entry point was invoked by someone other than the staking engine.
    NotStakingContract = 10,
    AlreadyWired = 11,
    NotWired = 12,
    MathError = 13,
    CastingFailure = 14,
    Reentrancy = 15,
    NoPendingAdmin = 16,
}

pub type YieldResult<T = ()> = core::result::Result<T, ErrorCode>;

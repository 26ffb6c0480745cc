use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Ledger is already initialized")]
    AlreadyInitialized,

    #[msg("Invalid parameter")]
    InvalidParameter,

    #[msg("Roster is full")]
    RosterFull,

    #[msg("Roster index was never populated")]
    IndexOutOfRange,

    #[msg("Roster entry is already inactive")]
    AlreadyInactive,

    #[msg("Beneficiary does not match the roster entry")]
    IdentityMismatch,

    #[msg("Payout account is not the beneficiary's associated token account")]
    InvalidDestination,

    #[msg("Insufficient custody pool balance")]
    InsufficientCustody,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,
}

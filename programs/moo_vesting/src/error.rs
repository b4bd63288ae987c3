use anchor_lang::prelude::*;

#[error_code]
pub enum MooVestingError {
    // Access control errors
    #[msg("Only the admin can perform this action")]
    Unauthorized,

    // Launch state errors
    #[msg("TGE timestamp is not set yet")]
    NotStarted,
    #[msg("Distribution has already started")]
    AlreadyStarted,
    #[msg("Invalid TGE timestamp")]
    InvalidTimestamp,

    // Commitment errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid merkle proof")]
    InvalidProof,

    // Schedule errors
    #[msg("Invalid unlock schedule")]
    InvalidSchedule,

    // Claim accounting errors
    #[msg("No tokens are claimable at this time")]
    NothingToClaim,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the vesting's token mint")]
    TokenMintMismatch,
}

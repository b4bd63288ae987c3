use anchor_lang::prelude::*;

use crate::state::UnlockSchedule;

/// Event emitted when a new vesting distribution is created
#[event]
pub struct VestingCreated {
    /// The vesting state account public key
    pub vesting: Pubkey,
    /// Admin of the distribution
    pub admin: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// The merkle root committing to all (recipient, allotment) pairs
    pub merkle_root: [u8; 32],
    /// TGE timestamp, 0 if deferred
    pub tge_timestamp: i64,
    /// Unlock curve for this distribution
    pub schedule: UnlockSchedule,
}

/// Event emitted when a deferred TGE timestamp is fixed
#[event]
pub struct TgeTimestampSet {
    /// The vesting state account public key
    pub vesting: Pubkey,
    /// Admin who set the timestamp
    pub admin: Pubkey,
    /// TGE timestamp from which tokens unlock
    pub tge_timestamp: i64,
}

/// Event emitted when tokens are claimed
#[event]
pub struct TokensClaimed {
    /// The vesting state account public key
    pub vesting: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount paid out in this transaction
    pub amount: u64,
    /// Cumulative amount this claimant has withdrawn
    pub claimed_amount: u64,
    /// Total allotment committed for this claimant
    pub allotment: u64,
    /// Total claimed across all claimants
    pub total_claimed: u64,
}

/// Event emitted when a never-launched distribution is withdrawn
#[event]
pub struct TokensWithdrawn {
    /// The vesting state account public key
    pub vesting: Pubkey,
    /// Admin who withdrew the tokens
    pub admin: Pubkey,
    /// Amount of tokens returned to the admin
    pub amount: u64,
}

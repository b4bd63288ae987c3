use anchor_lang::prelude::*;

use crate::error::MooVestingError;
use crate::state::UnlockSchedule;

/**
 * Main vesting state account
 *
 * Holds the distribution configuration published at creation plus the
 * running total of claimed tokens. The merkle root and token mint never
 * change; the TGE timestamp may transition from 0 (unset) to a positive
 * value exactly once, before any claim.
 *
 * Derivation: ["vesting", token_mint, admin]
 *
 * Lifecycle:
 * 1. Created during create_vesting
 * 2. Optionally updated once by set_tge_timestamp
 * 3. Updated during claims (total_claimed increments)
 * 4. Closed by withdraw, only while never launched
 */
#[account]
#[derive(Default, Debug)]
pub struct VestingState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Admin of the distribution
    /// - The only identity allowed to set a deferred TGE timestamp
    /// - May abort and withdraw while the distribution never launched
    pub admin: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA token account with the vesting PDA as authority
    /// - Derived from: ["vault", vesting_key]
    /// - Funded externally after creation
    pub token_vault: Pubkey,

    /// Merkle root committing to every (recipient, allotment) pair
    /// - Set once at creation, never mutated
    pub merkle_root: [u8; 32],

    /// TGE timestamp: the instant unlocking begins (Unix seconds)
    /// - 0 means unset; every claim is rejected until it is fixed
    pub tge_timestamp: i64,

    /// Unlock curve applied to every allotment
    pub schedule: UnlockSchedule,

    /// Total amount of tokens claimed across all recipients
    pub total_claimed: u64,
}

impl VestingState {
    /// Space required for this account: 8-byte discriminator + fields.
    /// The schedule serializes to at most 9 bytes (variant tag + duration).
    pub const LEN: usize = 8 + 1 + 32 + 32 + 32 + 32 + 8 + 9 + 8;

    /// Amount a claimant with `allotment` may withdraw at `now`, given that
    /// they already withdrew `claimed_amount`.
    ///
    /// This is the whole authorization arithmetic of a claim: schedule
    /// evaluation bounded by the allotment, minus the cumulative record.
    /// Proof verification happens before this is consulted.
    pub fn claimable_amount(
        &self,
        allotment: u64,
        claimed_amount: u64,
        now: i64,
    ) -> Result<u64> {
        require!(self.tge_timestamp != 0, MooVestingError::NotStarted);

        let unlocked = self.schedule.unlocked(allotment, self.tge_timestamp, now);

        // claimed_amount only ever grows by past claimable results, so it
        // cannot exceed a previously unlocked amount; a monotone schedule
        // keeps this subtraction from underflowing.
        let claimable = unlocked
            .checked_sub(claimed_amount)
            .ok_or(MooVestingError::ArithmeticOverflow)?;
        require!(claimable > 0, MooVestingError::NothingToClaim);

        Ok(claimable)
    }
}

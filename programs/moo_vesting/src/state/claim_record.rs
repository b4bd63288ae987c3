use anchor_lang::prelude::*;

/**
 * Individual claim record account
 *
 * Tracks how much one claimant has withdrawn from a distribution. Because
 * unlocking is cumulative, a claimant may claim any number of times; each
 * claim pays the newly unlocked delta and this record absorbs it.
 *
 * Derivation: ["claim", vesting_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (init_if_needed), starting at zero
 * 2. Updated with each subsequent claim
 * 3. Never deleted; `claimed_amount` is monotone non-decreasing and is
 *    written only by the claim instruction
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Cumulative amount withdrawn by this claimant
    pub claimed_amount: u64,
}

impl ClaimRecord {
    /// Space required for this account: 8-byte discriminator + fields
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}

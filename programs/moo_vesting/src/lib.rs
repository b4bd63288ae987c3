use anchor_lang::prelude::*;

declare_id!("GQEX84Laeg8JSJiiP5hL9L1vi3gGAMB3E6r1eWhf2fjS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::UnlockSchedule;
use utils::ProofNode;

/**
 * MOO Vesting Program
 *
 * A Solana program for distributing a fixed token supply to a committed set
 * of recipients, unlocking over time from a single TGE (token generation
 * event) timestamp.
 *
 * Key Features:
 * - Merkle-root commitment over (recipient, allotment) pairs, published once
 *   at creation and never changed afterwards
 * - Orientation-bit merkle proofs: each proof step carries its sibling hash
 *   and whether that sibling sits on the left, so proofs are non-malleable
 * - Pluggable unlock schedule: full unlock at TGE, or a linear ramp from TGE
 *   over a fixed duration
 * - Deferred launch: the TGE timestamp may be left unset at creation and
 *   fixed exactly once later by the admin; claims are rejected until then
 * - Cumulative per-recipient claim records, so recipients can claim as often
 *   as they like and only ever receive the newly unlocked delta
 *
 * Architecture:
 * - Vesting State PDA: immutable distribution parameters plus the running
 *   total of claimed tokens
 * - Token Vault PDA: holds the supply, funded externally after creation
 * - Claim Record PDAs: one per claimant, created lazily on first claim
 *
 * Workflow:
 * 1. Admin creates the vesting with the merkle root and (optionally) the TGE
 * 2. External tooling mints or transfers the supply into the vault
 * 3. If deferred, admin sets the TGE timestamp once, before any claim
 * 4. Recipients claim with their allotment and merkle proof; each claim pays
 *    out unlocked-minus-already-claimed tokens
 */
#[program]
pub mod moo_vesting {
    use super::*;

    /**
     * Creates a new vesting distribution
     *
     * Initializes the vesting state and an empty token vault. The merkle
     * root is fixed here for the lifetime of the distribution. A zero
     * `tge_timestamp` leaves the start instant unset (pre-launch).
     *
     * @param ctx - Account context with vesting, vault, mint, and admin
     * @param merkle_root - 32-byte commitment over all (recipient, allotment) leaves
     * @param tge_timestamp - Unix timestamp when unlocking begins, or 0 to defer
     * @param schedule - Unlock curve applied to every allotment
     *
     * Access Control: the signer becomes the admin
     */
    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        merkle_root: [u8; 32],
        tge_timestamp: i64,
        schedule: UnlockSchedule,
    ) -> Result<()> {
        handle_create_vesting(ctx, merkle_root, tge_timestamp, schedule)
    }

    /**
     * Sets the TGE timestamp for a deferred launch
     *
     * Allowed exactly once, only while the timestamp is still unset and no
     * claim has occurred.
     *
     * @param ctx - Account context with vesting and admin accounts
     * @param tge_timestamp - Unix timestamp when unlocking begins
     *
     * Access Control: Admin only
     */
    pub fn set_tge_timestamp(ctx: Context<SetTgeTimestamp>, tge_timestamp: i64) -> Result<()> {
        handle_set_tge_timestamp(ctx, tge_timestamp)
    }

    /**
     * Claims unlocked tokens with a merkle proof
     *
     * Verifies the (claimant, allotment) leaf against the commitment,
     * evaluates the unlock schedule at the current clock, and transfers the
     * difference between the unlocked amount and what this claimant has
     * already withdrawn.
     *
     * @param ctx - Account context with vesting, claim record, and token accounts
     * @param allotment - Total amount this claimant is entitled to, as committed
     * @param proof - Sibling hashes with orientation bits, leaf to root
     *
     * Access Control: any signer with a valid proof
     */
    pub fn claim(ctx: Context<Claim>, allotment: u64, proof: Vec<ProofNode>) -> Result<()> {
        handle_claim(ctx, allotment, proof)
    }

    /**
     * Aborts a distribution that never launched
     *
     * While the TGE timestamp is unset, the admin may drain the vault back
     * to their own token account and close the vesting and vault accounts.
     * Once a start instant exists the supply belongs to the recipients and
     * this instruction is rejected.
     *
     * @param ctx - Account context with vesting, vault, and admin accounts
     *
     * Access Control: Admin only
     */
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        handle_withdraw(ctx)
    }
}

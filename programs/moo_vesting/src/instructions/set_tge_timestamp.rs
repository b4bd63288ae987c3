use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for fixing a deferred TGE timestamp
 *
 * A distribution created with a zero TGE timestamp is pre-launch: the start
 * instant was unknown at deploy time. This instruction fixes it exactly
 * once. After that (or if the timestamp was set at creation) the start
 * instant is immutable for the lifetime of the distribution.
 *
 * Access Control: Only the admin can set the timestamp
 *
 * Business Logic:
 * - Rejected once a TGE timestamp exists, whatever its origin
 * - Rejected once any claim has occurred anywhere in the ledger
 * - The new timestamp must be positive (zero would keep the launch deferred)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetTgeTimestamp<'info> {
    /// The vesting state account to update
    #[account(mut)]
    pub vesting: Account<'info, VestingState>,

    /// The admin of the distribution
    /// - Must match the admin stored in the vesting state
    #[account(constraint = admin.key() == vesting.admin @ MooVestingError::Unauthorized)]
    pub admin: Signer<'info>,
}

/**
 * Sets the TGE timestamp for a deferred launch
 *
 * @param ctx - The account context containing vesting and admin accounts
 * @param tge_timestamp - Unix timestamp from which tokens unlock
 */
pub fn handle_set_tge_timestamp(
    ctx: Context<SetTgeTimestamp>,
    tge_timestamp: i64,
) -> Result<()> {
    let vesting = &mut ctx.accounts.vesting;

    // One-shot: any existing start instant, or any recorded claim, makes the
    // distribution already-started.
    require!(vesting.tge_timestamp == 0, MooVestingError::AlreadyStarted);
    require!(vesting.total_claimed == 0, MooVestingError::AlreadyStarted);

    require!(tge_timestamp > 0, MooVestingError::InvalidTimestamp);

    vesting.tge_timestamp = tge_timestamp;

    emit_cpi!(TgeTimestampSet {
        vesting: vesting.key(),
        admin: ctx.accounts.admin.key(),
        tge_timestamp,
    });

    Ok(())
}

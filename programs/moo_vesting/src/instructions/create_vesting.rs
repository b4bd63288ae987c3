use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new vesting distribution
 *
 * Initializes the vesting state PDA and an empty token vault owned by it.
 * The vault is funded afterwards by external tooling (minting or
 * transferring the supply into it); the program itself never mints.
 *
 * Access Control: the signer becomes the admin of the distribution
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateVesting<'info> {
    /// The main vesting state account (PDA)
    /// - Stores the immutable distribution parameters
    /// - Derived from: ["vesting", token_mint, admin]
    #[account(
        init,
        payer = admin,
        space = VestingState::LEN,
        seeds = [
            VESTING_SEED.as_bytes(),
            token_mint.key().as_ref(),
            admin.key().as_ref()
        ],
        bump
    )]
    pub vesting: Account<'info, VestingState>,

    /// Token vault (PDA) that will hold the distributed supply
    /// - The vesting PDA is the token authority
    /// - Derived from: ["vault", vesting_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = vesting,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), vesting.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The mint of the token being distributed
    /// - Supports both SPL Token and Token 2022
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The admin of the vesting distribution
    /// - Pays for account creation
    /// - The only identity allowed to set a deferred TGE timestamp
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new vesting distribution
 *
 * @param ctx - The account context containing all required accounts
 * @param merkle_root - Commitment over every (recipient, allotment) pair
 * @param tge_timestamp - Instant unlocking begins; 0 defers the launch
 * @param schedule - Unlock curve applied to every allotment
 *
 * Validation:
 * - The merkle root cannot be all zeros (it would admit no valid claim)
 * - A negative TGE timestamp is rejected; zero means "not set yet"
 * - A linear schedule must have a positive duration
 */
pub fn handle_create_vesting(
    ctx: Context<CreateVesting>,
    merkle_root: [u8; 32],
    tge_timestamp: i64,
    schedule: UnlockSchedule,
) -> Result<()> {
    require!(merkle_root != [0; 32], MooVestingError::InvalidMerkleRoot);
    require!(tge_timestamp >= 0, MooVestingError::InvalidTimestamp);
    require!(schedule.is_valid(), MooVestingError::InvalidSchedule);

    let vesting = &mut ctx.accounts.vesting;
    vesting.bump = ctx.bumps.vesting;
    vesting.admin = ctx.accounts.admin.key();
    vesting.token_mint = ctx.accounts.token_mint.key();
    vesting.token_vault = ctx.accounts.token_vault.key();
    vesting.merkle_root = merkle_root;
    vesting.tge_timestamp = tge_timestamp;
    vesting.schedule = schedule;
    // total_claimed starts at its default of 0

    emit_cpi!(VestingCreated {
        vesting: vesting.key(),
        admin: ctx.accounts.admin.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        merkle_root,
        tge_timestamp,
        schedule,
    });

    Ok(())
}

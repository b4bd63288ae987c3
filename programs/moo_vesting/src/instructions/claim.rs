use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{hash_leaf, transfer_token, verify, ProofNode};

/**
 * Account context for claiming unlocked tokens
 *
 * A claimant proves membership in the commitment with a merkle proof for
 * their (claimant, allotment) leaf, then receives the portion of the
 * allotment that the schedule has unlocked and they have not yet withdrawn.
 *
 * The claim record PDA is a writable account of this transaction, so the
 * runtime serializes concurrent claims by the same claimant while claims by
 * different claimants proceed independently. The record update and the
 * vault transfer commit atomically with the transaction; a failed transfer
 * leaves no trace in the ledger.
 *
 * Access Control: any signer with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The vesting state with the commitment and schedule
    /// - Modified to update total_claimed
    #[account(mut)]
    pub vesting: Account<'info, VestingState>,

    /// Cumulative claim record for this claimant
    /// - Created on first claim, starting at zero
    /// - Derived from: ["claim", vesting_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), vesting.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the distributed supply
    /// - Derived from: ["vault", vesting_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), vesting.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account receiving the payout
    #[account(
        mut,
        token::mint = vesting.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == vesting.token_mint @ MooVestingError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant withdrawing their unlocked tokens
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for claim record creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param allotment - Total amount this claimant is entitled to (committed in the tree)
 * @param proof - Sibling hashes with orientation bits, ordered leaf to root
 *
 * Order of checks:
 * 1. Reject while the TGE timestamp is unset
 * 2. Verify the merkle proof for (claimant, allotment) — the allotment is
 *    trusted only as committed, never as supplied
 * 3. Evaluate the schedule at the current clock and take the delta over the
 *    claim record; reject if nothing is claimable
 * 4. Record, then transfer from the vault with the vesting PDA as signer
 */
pub fn handle_claim(ctx: Context<Claim>, allotment: u64, proof: Vec<ProofNode>) -> Result<()> {
    let vesting = &mut ctx.accounts.vesting;
    let claim_record = &mut ctx.accounts.claim_record;

    // ===== VALIDATION PHASE =====

    require!(vesting.tge_timestamp != 0, MooVestingError::NotStarted);

    let claimant_key = ctx.accounts.claimant.key();
    let leaf = hash_leaf(&claimant_key, allotment);
    require!(
        verify(&proof, vesting.merkle_root, leaf),
        MooVestingError::InvalidProof
    );

    // "now" comes from the environment on every call; the program keeps no
    // clock of its own.
    let now = Clock::get()?.unix_timestamp;
    let claimable = vesting.claimable_amount(allotment, claim_record.claimed_amount, now)?;

    require!(
        ctx.accounts.token_vault.amount >= claimable,
        MooVestingError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE =====

    let claimed_amount = claim_record
        .claimed_amount
        .checked_add(claimable)
        .ok_or(MooVestingError::ArithmeticOverflow)?;
    claim_record.claimed_amount = claimed_amount;

    let total_claimed = vesting
        .total_claimed
        .checked_add(claimable)
        .ok_or(MooVestingError::ArithmeticOverflow)?;
    vesting.total_claimed = total_claimed;

    // ===== INTERACTIONS PHASE =====

    let token_mint_key = vesting.token_mint;
    let admin_key = vesting.admin;
    let vesting_bump = vesting.bump;
    let vesting_key = vesting.key();

    let seeds = &[
        VESTING_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &[vesting_bump],
    ];
    let signer = &[&seeds[..]];

    // A failed transfer aborts the transaction, reverting the record and
    // total updates above with it.
    transfer_token(
        ctx.accounts.vesting.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claimable,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensClaimed {
        vesting: vesting_key,
        claimant: claimant_key,
        amount: claimable,
        claimed_amount,
        allotment,
        total_claimed,
    });

    Ok(())
}

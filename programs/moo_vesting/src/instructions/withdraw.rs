use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{close_token_account_with_pda, transfer_token};

/**
 * Account context for aborting a distribution that never launched
 *
 * While the TGE timestamp is unset no token can have been claimed, so the
 * admin may still unwind the deployment: drain whatever was deposited back
 * to their own token account and close the vault and vesting accounts to
 * reclaim rent. Once a start instant exists the supply is committed to the
 * recipients and withdrawal is rejected.
 *
 * Access Control: Only the admin can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The vesting state account to close
    /// - Rent returned to the admin
    #[account(
        mut,
        close = admin
    )]
    pub vesting: Account<'info, VestingState>,

    /// Token vault to drain and close
    /// - Derived from: ["vault", vesting_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), vesting.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Admin's token account receiving the remaining balance
    #[account(
        mut,
        token::mint = vesting.token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == vesting.token_mint @ MooVestingError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The admin of the distribution
    /// - Must match the admin stored in the vesting state
    /// - Receives the tokens and the reclaimed rent
    #[account(
        mut,
        constraint = admin.key() == vesting.admin @ MooVestingError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws the vault balance of a never-launched distribution
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let vesting = &ctx.accounts.vesting;

    // Pre-launch only. A set TGE timestamp commits the supply.
    require!(vesting.tge_timestamp == 0, MooVestingError::AlreadyStarted);

    let amount = ctx.accounts.token_vault.amount;

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

    if amount > 0 {
        transfer_token(
            ctx.accounts.vesting.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.admin_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    // Close the emptied vault; rent goes to the admin with the rest.
    close_token_account_with_pda(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.vesting.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    emit_cpi!(TokensWithdrawn {
        vesting: vesting_key,
        admin: admin_key,
        amount,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::errors::*;
use crate::events::MigrationInitialized;
use crate::ledger::{self, Collaborators, Invocation};
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    /// Token being migrated away from
    pub legacy_mint: Account<'info, Mint>,

    /// Token minted 1:1 against deposits
    pub new_mint: Account<'info, Mint>,

    #[account(constraint = membership_mint.decimals == 0 @ MigrationError::InvalidCollectibleMint)]
    pub membership_mint: Account<'info, Mint>,

    #[account(constraint = affiliate_mint.decimals == 0 @ MigrationError::InvalidCollectibleMint)]
    pub affiliate_mint: Account<'info, Mint>,

    /// Custody of deposited legacy tokens
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = legacy_mint,
        associated_token::authority = migration_state
    )]
    pub legacy_vault: Account<'info, TokenAccount>,

    /// Memberships handed out by `claim_memberships`, funded by the owner
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = membership_mint,
        associated_token::authority = migration_state
    )]
    pub membership_pool: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let invocation = Invocation::current(ctx.accounts.authority.key(), ctx.accounts.migration_state.key())?;
    let collaborators = Collaborators {
        legacy_mint: ctx.accounts.legacy_mint.key(),
        new_mint: ctx.accounts.new_mint.key(),
        membership_mint: ctx.accounts.membership_mint.key(),
        affiliate_mint: ctx.accounts.affiliate_mint.key(),
        legacy_vault: ctx.accounts.legacy_vault.key(),
        membership_pool: ctx.accounts.membership_pool.key(),
    };

    ledger::initialize(
        &mut ctx.accounts.migration_state,
        &invocation,
        &collaborators,
        ctx.accounts.legacy_mint.decimals,
    )?;

    msg!("Legacy mint: {}", collaborators.legacy_mint);
    msg!("New mint: {}", collaborators.new_mint);
    msg!("Membership mint: {}", collaborators.membership_mint);
    msg!("Affiliate mint: {}", collaborators.affiliate_mint);

    emit!(MigrationInitialized {
        legacy_mint: collaborators.legacy_mint,
        new_mint: collaborators.new_mint,
        membership_mint: collaborators.membership_mint,
        affiliate_mint: collaborators.affiliate_mint,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::errors::*;
use crate::events::Deposited;
use crate::ledger::{self, Invocation};
use crate::spl::SplLegacyToken;
use crate::state::*;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    /// Created on the user's first deposit
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserInfo::INIT_SPACE,
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,

    /// User's legacy token account
    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ MigrationError::InvalidTokenAccount,
        constraint = user_token_account.mint == migration_state.legacy_mint @ MigrationError::InvalidTokenAccount
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = migration_state.legacy_vault
    )]
    pub legacy_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let user = ctx.accounts.user.key();
    let invocation = Invocation::current(user, ctx.accounts.migration_state.key())?;

    let mut legacy = SplLegacyToken {
        token_program: ctx.accounts.token_program.to_account_info(),
        source: ctx.accounts.user_token_account.to_account_info(),
        vault: ctx.accounts.legacy_vault.to_account_info(),
        depositor: ctx.accounts.user.to_account_info(),
    };

    let user_info = &mut ctx.accounts.user_info;
    user_info.bump = ctx.bumps.user_info;

    ledger::deposit(
        &mut ctx.accounts.migration_state,
        user_info,
        &invocation,
        u128::from(amount),
        &mut legacy,
    )?;

    msg!("User: {}", user);
    msg!("Unlocks at slot {}", user_info.unlock_block());

    emit!(Deposited {
        user,
        amount: u128::from(amount),
        deposited: user_info.deposited,
        anchor_block: user_info.anchor_block,
    });

    Ok(())
}

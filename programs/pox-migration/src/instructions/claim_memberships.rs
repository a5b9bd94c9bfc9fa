use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::collaborators::Collaborator;
use crate::constants::*;
use crate::events::MembershipClaimed;
use crate::ledger::{self, Invocation};
use crate::spl::{MintCapabilities, SplMembershipPool};
use crate::state::*;

#[derive(Accounts)]
pub struct ClaimMemberships<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    /// CHECK: PDA is derived from `user`; empty for users who never deposited
    #[account(
        mut,
        seeds = [USER_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_info: UncheckedAccount<'info>,

    #[account(address = migration_state.membership_mint)]
    pub membership_mint: Account<'info, Mint>,

    #[account(
        mut,
        address = migration_state.membership_pool
    )]
    pub membership_pool: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = membership_mint,
        associated_token::authority = user
    )]
    pub user_membership_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimMemberships>) -> Result<()> {
    let user = ctx.accounts.user.key();
    let invocation = Invocation::current(user, ctx.accounts.migration_state.key())?;
    let user_account = ctx.accounts.user_info.to_account_info();
    let mut user_info = UserInfo::load(&user_account)?;

    let bump = [ctx.accounts.migration_state.bump];
    let seeds: &[&[u8]] = &[MIGRATION_STATE_SEED, &bump];
    let signer_seeds = &[seeds];

    let capabilities = MintCapabilities {
        collaborator: Collaborator::Membership,
        mint: &ctx.accounts.membership_mint,
    };
    let mut pool = SplMembershipPool {
        token_program: ctx.accounts.token_program.to_account_info(),
        pool: ctx.accounts.membership_pool.to_account_info(),
        destination: ctx.accounts.user_membership_account.to_account_info(),
        authority: ctx.accounts.migration_state.to_account_info(),
        signer_seeds,
        available: ctx.accounts.membership_pool.amount,
    };

    let remaining = ledger::claim_memberships(
        &mut ctx.accounts.migration_state,
        &mut user_info,
        &invocation,
        &capabilities,
        &mut pool,
    )?;
    user_info.store(&user_account)?;

    msg!("User: {}", user);

    emit!(MembershipClaimed {
        user,
        membership_id: MEMBERSHIP_ID,
        remaining,
    });

    Ok(())
}

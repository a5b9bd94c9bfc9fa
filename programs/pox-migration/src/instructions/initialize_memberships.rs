use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::*;
use crate::events::MembershipsInitialized;
use crate::ledger::{self, Invocation};
use crate::state::*;

#[derive(Accounts)]
pub struct InitializeMemberships<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    #[account(address = migration_state.membership_pool)]
    pub membership_pool: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<InitializeMemberships>) -> Result<()> {
    let invocation = Invocation::current(ctx.accounts.authority.key(), ctx.accounts.migration_state.key())?;

    let pool_size = ledger::initialize_memberships(
        &mut ctx.accounts.migration_state,
        &invocation,
        &*ctx.accounts.membership_pool,
    )?;

    emit!(MembershipsInitialized { pool_size });

    Ok(())
}

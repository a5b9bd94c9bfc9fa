use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::*;
use crate::events::PhaseStarted;
use crate::ledger::{self, Invocation};
use crate::state::*;

#[derive(Accounts)]
pub struct StartMembershipMigration<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    /// Must already hold memberships
    #[account(address = migration_state.membership_pool)]
    pub membership_pool: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<StartMembershipMigration>) -> Result<()> {
    let invocation = Invocation::current(ctx.accounts.authority.key(), ctx.accounts.migration_state.key())?;

    ledger::start_membership_migration(
        &mut ctx.accounts.migration_state,
        &invocation,
        &*ctx.accounts.membership_pool,
    )?;

    emit!(PhaseStarted {
        phase: Phase::Membership,
    });

    Ok(())
}

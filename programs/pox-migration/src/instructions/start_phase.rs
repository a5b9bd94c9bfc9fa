use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::PhaseStarted;
use crate::ledger::{self, Invocation};
use crate::state::*;

/// Owner-only phase switch shared by `start_migration` and
/// `start_affiliate_migration`
#[derive(Accounts)]
pub struct StartPhase<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<StartPhase>, phase: Phase) -> Result<()> {
    let invocation = Invocation::current(ctx.accounts.authority.key(), ctx.accounts.migration_state.key())?;

    ledger::start_phase(&mut ctx.accounts.migration_state, &invocation, phase)?;

    emit!(PhaseStarted { phase });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::OwnershipTransferred;
use crate::ledger::{self, Invocation};
use crate::state::*;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    /// Current owner
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let invocation = Invocation::current(ctx.accounts.authority.key(), ctx.accounts.migration_state.key())?;

    let previous_owner = ledger::transfer_ownership(&mut ctx.accounts.migration_state, &invocation, new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::OwnershipTransferred;
use crate::ledger;
use crate::state::*;

#[derive(Accounts)]
pub struct Create<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + MigrationState::INIT_SPACE,
        seeds = [MIGRATION_STATE_SEED],
        bump
    )]
    pub migration_state: Account<'info, MigrationState>,

    /// Becomes the owner
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Create>) -> Result<()> {
    let owner = ctx.accounts.payer.key();
    ledger::create(&mut ctx.accounts.migration_state, owner, ctx.bumps.migration_state)?;

    msg!("Migration created");
    msg!("Owner: {}", owner);

    emit!(OwnershipTransferred {
        previous_owner: Pubkey::default(),
        new_owner: owner,
    });

    Ok(())
}

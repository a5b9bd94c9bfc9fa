use anchor_lang::prelude::*;
use crate::constants::*;
use crate::ledger;
use crate::state::*;

#[derive(Accounts)]
pub struct IsMigrationActive<'info> {
    #[account(
        seeds = [MIGRATION_STATE_SEED],
        bump = migration_state.bump
    )]
    pub migration_state: Account<'info, MigrationState>,
}

pub fn is_migration_active(ctx: Context<IsMigrationActive>) -> Result<bool> {
    Ok(ledger::is_migration_active(&ctx.accounts.migration_state))
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetUserInfo<'info> {
    /// CHECK: PDA is derived from `user`; empty until the first deposit
    #[account(
        seeds = [USER_INFO_SEED, user.as_ref()],
        bump
    )]
    pub user_info: UncheckedAccount<'info>,
}

/// Users who never deposited read as all zeroes
pub fn get_user_info(ctx: Context<GetUserInfo>, _user: Pubkey) -> Result<UserInfoView> {
    let info = UserInfo::load(&ctx.accounts.user_info.to_account_info())?;
    Ok(info.view())
}

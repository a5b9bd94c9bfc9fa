use anchor_lang::prelude::*;

pub mod collaborators;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod spl;
pub mod state;

use instructions::*;
use state::{Phase, UserInfoView};

declare_id!("8VnV5rnFQ2TjwNccFuD7BSRuZ5Yw6w7eYDqFtjj4vPn");

#[program]
pub mod pox_migration {
    use super::*;

    /// Create the migration state with the signer as the only admin
    pub fn create(ctx: Context<Create>) -> Result<()> {
        instructions::create::handler(ctx)
    }

    /// Record the legacy, new, membership and affiliate mints (once)
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Open deposits and the new token claim
    pub fn start_migration(ctx: Context<StartPhase>) -> Result<()> {
        instructions::start_phase::handler(ctx, Phase::General)
    }

    pub fn start_affiliate_migration(ctx: Context<StartPhase>) -> Result<()> {
        instructions::start_phase::handler(ctx, Phase::Affiliate)
    }

    /// Open membership claims. The pool must already be funded.
    pub fn start_membership_migration(ctx: Context<StartMembershipMigration>) -> Result<()> {
        instructions::start_membership_migration::handler(ctx)
    }

    pub fn initialize_memberships(ctx: Context<InitializeMemberships>) -> Result<()> {
        instructions::initialize_memberships::handler(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    /// Deposit legacy tokens. The first deposit must be at least 4000 tokens.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Mint the whole deposit 1:1 in new tokens once the lock has passed
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens::handler(ctx)
    }

    /// Mint one affiliate collectible per 40000 tokens deposited
    pub fn claim_affiliates(ctx: Context<ClaimAffiliates>) -> Result<()> {
        instructions::claim_affiliates::handler(ctx)
    }

    /// Transfer one membership from the pool once the lock has passed
    pub fn claim_memberships(ctx: Context<ClaimMemberships>) -> Result<()> {
        instructions::claim_memberships::handler(ctx)
    }

    pub fn is_migration_active(ctx: Context<IsMigrationActive>) -> Result<bool> {
        instructions::queries::is_migration_active(ctx)
    }

    pub fn get_user_info(ctx: Context<GetUserInfo>, user: Pubkey) -> Result<UserInfoView> {
        instructions::queries::get_user_info(ctx, user)
    }
}

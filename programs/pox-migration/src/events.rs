use anchor_lang::prelude::*;

use crate::state::Phase;

#[event]
pub struct MigrationInitialized {
    pub legacy_mint: Pubkey,
    pub new_mint: Pubkey,
    pub membership_mint: Pubkey,
    pub affiliate_mint: Pubkey,
}

#[event]
pub struct PhaseStarted {
    pub phase: Phase,
}

#[event]
pub struct MembershipsInitialized {
    pub pool_size: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub amount: u128,
    pub deposited: u128,
    pub anchor_block: u64,
}

#[event]
pub struct TokensClaimed {
    pub user: Pubkey,
    pub amount: u128,
}

#[event]
pub struct AffiliatesClaimed {
    pub user: Pubkey,
    pub ids: Vec<u64>,
    pub minted_affiliates: u64,
}

#[event]
pub struct MembershipClaimed {
    pub user: Pubkey,
    pub membership_id: u64,
    pub remaining: u64,
}

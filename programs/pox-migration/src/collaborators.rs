//! Interfaces of the external ledgers the migration drives.
//!
//! The migration never writes collaborator state directly: it pulls legacy
//! tokens, mints new tokens and collectibles, and hands out memberships only
//! through these traits. Whether the migration may do so at all is decided by
//! the collaborator itself and queried through [`CapabilityChecker`].

use anchor_lang::prelude::*;

/// Collaborators whose side effects require a capability grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collaborator {
    NewToken,
    Membership,
    Affiliate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Minter,
    Admin,
}

impl Collaborator {
    pub fn required_capabilities(&self) -> &'static [Capability] {
        match self {
            Collaborator::NewToken => &[Capability::Minter],
            Collaborator::Membership | Collaborator::Affiliate => {
                &[Capability::Admin, Capability::Minter]
            }
        }
    }
}

pub trait CapabilityChecker {
    /// Whether `holder` has been granted `capability` on `collaborator`
    fn has_capability(&self, collaborator: Collaborator, capability: Capability, holder: &Pubkey) -> bool;
}

pub trait LegacyToken {
    /// Move `amount` from `from` into the migration's custody
    fn pull(&mut self, from: &Pubkey, amount: u128) -> Result<()>;
}

pub trait NewToken {
    fn mint(&mut self, to: &Pubkey, amount: u128) -> Result<()>;
}

pub trait MembershipPool {
    /// Memberships currently held by the migration
    fn balance(&self) -> u64;
}

pub trait MembershipDistributor: MembershipPool {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

pub trait AffiliateCollection {
    /// Mint a single affiliate collectible, returning its identifier
    fn mint(&mut self, to: &Pubkey) -> Result<u64>;
}

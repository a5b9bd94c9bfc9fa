//! SPL token program implementations of the collaborator interfaces.
//!
//! Each adapter wraps the accounts of a single instruction. Signing as the
//! migration uses the `MigrationState` PDA seeds; the token program's own
//! errors (insufficient funds, wrong authority) are returned unchanged.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, TokenAccount, Transfer};

use crate::collaborators::*;
use crate::errors::MigrationError;

fn token_amount(amount: u128) -> Result<u64> {
    u64::try_from(amount).map_err(|_| error!(MigrationError::AmountOverflow))
}

/// Capabilities read from a collaborator mint: the mint authority is the
/// minter, the freeze authority is the admin.
pub struct MintCapabilities<'a> {
    pub collaborator: Collaborator,
    pub mint: &'a Mint,
}

impl CapabilityChecker for MintCapabilities<'_> {
    fn has_capability(&self, collaborator: Collaborator, capability: Capability, holder: &Pubkey) -> bool {
        if collaborator != self.collaborator {
            return false;
        }
        match capability {
            Capability::Minter => self.mint.mint_authority.contains(holder),
            Capability::Admin => self.mint.freeze_authority.contains(holder),
        }
    }
}

/// Pulls deposits from the depositor's token account into the legacy vault
pub struct SplLegacyToken<'info> {
    pub token_program: AccountInfo<'info>,
    pub source: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub depositor: AccountInfo<'info>,
}

impl LegacyToken for SplLegacyToken<'_> {
    fn pull(&mut self, from: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(*self.depositor.key, *from);

        token::transfer(
            CpiContext::new(
                self.token_program.clone(),
                Transfer {
                    from: self.source.clone(),
                    to: self.vault.clone(),
                    authority: self.depositor.clone(),
                },
            ),
            token_amount(amount)?,
        )
    }
}

pub struct SplNewToken<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl NewToken for SplNewToken<'_, '_> {
    fn mint(&mut self, _to: &Pubkey, amount: u128) -> Result<()> {
        token::mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.mint.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            token_amount(amount)?,
        )
    }
}

/// Ledger-owned membership account funded ahead of the membership phase
pub struct SplMembershipPool<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
    pub available: u64,
}

impl MembershipPool for TokenAccount {
    fn balance(&self) -> u64 {
        self.amount
    }
}

impl MembershipPool for SplMembershipPool<'_, '_> {
    fn balance(&self) -> u64 {
        self.available
    }
}

impl MembershipDistributor for SplMembershipPool<'_, '_> {
    fn transfer(&mut self, _to: &Pubkey, amount: u64) -> Result<()> {
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.pool.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )?;

        self.available = self.available.saturating_sub(amount);
        Ok(())
    }
}

/// Mints affiliate units one at a time. A unit's identifier is the mint
/// supply before it was minted, so identifiers run 0, 1, 2, ...
pub struct SplAffiliateCollection<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
    pub next_id: u64,
}

impl AffiliateCollection for SplAffiliateCollection<'_, '_> {
    fn mint(&mut self, _to: &Pubkey) -> Result<u64> {
        token::mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.mint.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            1,
        )?;

        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(MigrationError::ArithmeticOverflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::program_option::COption;
    use anchor_lang::solana_program::program_pack::Pack;

    fn mint_with(mint_authority: COption<Pubkey>, freeze_authority: COption<Pubkey>) -> Mint {
        let mut data = [0u8; anchor_spl::token::spl_token::state::Mint::LEN];
        let state = anchor_spl::token::spl_token::state::Mint {
            mint_authority,
            supply: 0,
            decimals: 0,
            is_initialized: true,
            freeze_authority,
        };
        Pack::pack(state, &mut data).unwrap();
        Mint::try_deserialize_unchecked(&mut &data[..]).unwrap()
    }

    #[test]
    fn test_mint_authorities_map_to_capabilities() {
        let ledger = Pubkey::new_unique();
        let mint = mint_with(COption::Some(ledger), COption::None);
        let caps = MintCapabilities {
            collaborator: Collaborator::Affiliate,
            mint: &mint,
        };

        assert!(caps.has_capability(Collaborator::Affiliate, Capability::Minter, &ledger));
        assert!(!caps.has_capability(Collaborator::Affiliate, Capability::Admin, &ledger));
        assert!(!caps.has_capability(Collaborator::Affiliate, Capability::Minter, &Pubkey::new_unique()));
        assert!(!caps.has_capability(Collaborator::NewToken, Capability::Minter, &ledger));
    }

    #[test]
    fn test_token_amount_bounds() {
        assert_eq!(token_amount(u128::from(u64::MAX)).unwrap(), u64::MAX);
        assert!(token_amount(u128::from(u64::MAX) + 1).is_err());
    }
}

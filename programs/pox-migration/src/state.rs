use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MigrationError;

/// Migration ledger state (one per program)
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct MigrationState {
    pub owner: Pubkey,
    pub legacy_mint: Pubkey,
    pub new_mint: Pubkey,
    pub membership_mint: Pubkey,
    pub affiliate_mint: Pubkey,
    pub legacy_vault: Pubkey,      // Ledger-owned account receiving deposits
    pub membership_pool: Pubkey,   // Ledger-owned pre-funded membership account
    pub initialized: bool,
    pub general_phase_active: bool,
    pub affiliate_phase_active: bool,
    pub membership_phase_active: bool,
    pub memberships_initialized: bool,
    pub membership_pool_size: u64, // Pool balance when memberships were initialized
    pub memberships_claimed: u64,
    pub decimals: u8,
    pub min_deposit: u128,
    pub affiliate_unit: u128,
    pub total_deposited: u128,
    pub total_tokens_claimed: u128,
    pub total_affiliates_minted: u64,
    pub depositor_count: u64,
    pub bump: u8,
}

impl MigrationState {
    pub fn is_phase_active(&self, phase: Phase) -> bool {
        match phase {
            Phase::General => self.general_phase_active,
            Phase::Affiliate => self.affiliate_phase_active,
            Phase::Membership => self.membership_phase_active,
        }
    }

    pub(crate) fn set_phase_active(&mut self, phase: Phase) {
        match phase {
            Phase::General => self.general_phase_active = true,
            Phase::Affiliate => self.affiliate_phase_active = true,
            Phase::Membership => self.membership_phase_active = true,
        }
    }

    /// `whole_tokens` expressed in the legacy mint's smallest unit
    pub fn scaled(whole_tokens: u128, decimals: u8) -> Option<u128> {
        10u128
            .checked_pow(u32::from(decimals))
            .and_then(|unit| unit.checked_mul(whole_tokens))
    }
}

/// Per-depositor progress across the token, membership and affiliate tracks
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct UserInfo {
    pub user: Pubkey,
    pub deposited: u128,
    pub anchor_block: u64,       // Slot of first deposit, never moves
    pub claimed_tokens: bool,
    pub claimed_membership: bool,
    pub minted_affiliates: u64,
    pub bump: u8,
}

impl UserInfo {
    pub fn is_tracked(&self) -> bool {
        self.deposited > 0
    }

    /// First slot at which the locked tracks may be claimed
    pub fn unlock_block(&self) -> u64 {
        self.anchor_block.saturating_add(LOCK_BLOCKS)
    }

    pub fn is_unlocked_at(&self, block: u64) -> bool {
        block.saturating_sub(self.anchor_block) >= LOCK_BLOCKS
    }

    pub fn eligible_affiliates(&self, affiliate_unit: u128) -> u64 {
        if affiliate_unit == 0 {
            return 0;
        }
        u64::try_from(self.deposited / affiliate_unit).unwrap_or(u64::MAX)
    }

    /// Reads the record stored at `account`. A PDA that was never created
    /// reads as a fresh, untracked record.
    pub fn load(account: &AccountInfo) -> Result<Self> {
        if account.data_is_empty() {
            return Ok(UserInfo::default());
        }
        require_keys_eq!(*account.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);

        let data = account.try_borrow_data()?;
        UserInfo::try_deserialize(&mut &data[..])
    }

    /// Writes the record back to an existing account
    pub fn store(&self, account: &AccountInfo) -> Result<()> {
        require!(!account.data_is_empty(), MigrationError::NothingDeposited);
        require_keys_eq!(*account.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);

        let mut data = account.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    pub fn view(&self) -> UserInfoView {
        UserInfoView {
            deposited: self.deposited,
            minted_affiliates: self.minted_affiliates,
            claimed_tokens: self.claimed_tokens,
            claimed_membership: self.claimed_membership,
            anchor_block: self.anchor_block,
        }
    }
}

/// Read-only projection returned by `get_user_info`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserInfoView {
    pub deposited: u128,
    pub minted_affiliates: u64,
    pub claimed_tokens: bool,
    pub claimed_membership: bool,
    pub anchor_block: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    General,
    Affiliate,
    Membership,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_thresholds() {
        assert_eq!(MigrationState::scaled(4_000, 0), Some(4_000));
        assert_eq!(MigrationState::scaled(4_000, 6), Some(4_000_000_000));
        assert_eq!(
            MigrationState::scaled(40_000, 18),
            Some(40_000 * 1_000_000_000_000_000_000)
        );
        assert_eq!(MigrationState::scaled(40_000, 255), None);
    }

    #[test]
    fn test_unlock_boundary() {
        let info = UserInfo {
            deposited: 1,
            anchor_block: 1_000,
            ..Default::default()
        };

        assert!(!info.is_unlocked_at(1_000));
        assert!(!info.is_unlocked_at(1_255));
        assert!(info.is_unlocked_at(1_256));
        assert_eq!(info.unlock_block(), 1_256);
    }

    #[test]
    fn test_eligible_affiliates_floors() {
        let unit = 40_000;
        let mut info = UserInfo::default();
        assert_eq!(info.eligible_affiliates(unit), 0);

        info.deposited = 39_999;
        assert_eq!(info.eligible_affiliates(unit), 0);

        info.deposited = 80_000;
        assert_eq!(info.eligible_affiliates(unit), 2);

        info.deposited = 119_999;
        assert_eq!(info.eligible_affiliates(unit), 2);
    }

    #[test]
    fn test_phase_flags_independent() {
        let mut state = MigrationState::default();
        state.set_phase_active(Phase::Affiliate);

        assert!(state.is_phase_active(Phase::Affiliate));
        assert!(!state.is_phase_active(Phase::General));
        assert!(!state.is_phase_active(Phase::Membership));
    }

    fn serialized(info: &UserInfo) -> Vec<u8> {
        let mut data = Vec::new();
        info.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_missing_record_reads_as_zero_view() {
        let key = Pubkey::new_unique();
        let owner = anchor_lang::system_program::ID;
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let info = UserInfo::load(&account).unwrap();
        assert!(!info.is_tracked());
        assert_eq!(info.view(), UserInfoView::default());
    }

    #[test]
    fn test_view_maps_stored_record() {
        let user = Pubkey::new_unique();
        let record = UserInfo {
            user,
            deposited: 85_000,
            anchor_block: 4_242,
            claimed_tokens: true,
            claimed_membership: false,
            minted_affiliates: 2,
            bump: 254,
        };

        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1;
        let mut data = serialized(&record);
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert_eq!(
            UserInfo::load(&account).unwrap().view(),
            UserInfoView {
                deposited: 85_000,
                minted_affiliates: 2,
                claimed_tokens: true,
                claimed_membership: false,
                anchor_block: 4_242,
            }
        );
    }

    #[test]
    fn test_store_writes_back_in_place() {
        let record = UserInfo {
            user: Pubkey::new_unique(),
            deposited: 4_000,
            anchor_block: 10,
            ..Default::default()
        };

        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1;
        let mut data = serialized(&record);
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let mut info = UserInfo::load(&account).unwrap();
        info.claimed_tokens = true;
        info.store(&account).unwrap();

        assert!(UserInfo::load(&account).unwrap().claimed_tokens);
    }

    #[test]
    fn test_record_owned_by_another_program_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 1;
        let mut data = serialized(&UserInfo::default());
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(UserInfo::load(&account).is_err());
    }
}

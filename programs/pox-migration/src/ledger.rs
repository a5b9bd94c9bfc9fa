//! Deposit and claim state machine.
//!
//! Every operation receives the ledger records it touches explicitly, so the
//! same rules run on-chain against account data and in tests against plain
//! structs. Operations validate first, call collaborators second and only
//! then write ledger state: a collaborator failure leaves the records as
//! they were.

use anchor_lang::prelude::*;

use crate::collaborators::*;
use crate::constants::*;
use crate::errors::MigrationError;
use crate::state::*;

/// Who is calling, which address the ledger acts as, and the current slot
#[derive(Clone, Copy, Debug)]
pub struct Invocation {
    pub caller: Pubkey,
    pub ledger: Pubkey,
    pub block: u64,
}

impl Invocation {
    /// Invocation at the current slot
    pub fn current(caller: Pubkey, ledger: Pubkey) -> Result<Self> {
        Ok(Invocation {
            caller,
            ledger,
            block: Clock::get()?.slot,
        })
    }
}

/// Collaborator mints and the ledger-owned accounts holding their tokens
#[derive(Clone, Copy, Debug, Default)]
pub struct Collaborators {
    pub legacy_mint: Pubkey,
    pub new_mint: Pubkey,
    pub membership_mint: Pubkey,
    pub affiliate_mint: Pubkey,
    pub legacy_vault: Pubkey,
    pub membership_pool: Pubkey,
}

impl Collaborators {
    fn keys(&self) -> [Pubkey; 6] {
        [
            self.legacy_mint,
            self.new_mint,
            self.membership_mint,
            self.affiliate_mint,
            self.legacy_vault,
            self.membership_pool,
        ]
    }
}

pub fn create(state: &mut MigrationState, owner: Pubkey, bump: u8) -> Result<()> {
    require_keys_neq!(owner, Pubkey::default(), MigrationError::ZeroAddress);

    *state = MigrationState {
        owner,
        bump,
        ..Default::default()
    };

    Ok(())
}

pub fn initialize(
    state: &mut MigrationState,
    invocation: &Invocation,
    collaborators: &Collaborators,
    decimals: u8,
) -> Result<()> {
    ensure_owner(state, invocation)?;
    require!(!state.initialized, MigrationError::AlreadyInitialized);
    require!(
        collaborators.keys().iter().all(|key| *key != Pubkey::default()),
        MigrationError::ZeroAddress
    );

    let min_deposit = MigrationState::scaled(MIN_DEPOSIT_TOKENS, decimals)
        .ok_or(MigrationError::ArithmeticOverflow)?;
    let affiliate_unit = MigrationState::scaled(AFFILIATE_UNIT_TOKENS, decimals)
        .ok_or(MigrationError::ArithmeticOverflow)?;

    state.legacy_mint = collaborators.legacy_mint;
    state.new_mint = collaborators.new_mint;
    state.membership_mint = collaborators.membership_mint;
    state.affiliate_mint = collaborators.affiliate_mint;
    state.legacy_vault = collaborators.legacy_vault;
    state.membership_pool = collaborators.membership_pool;
    state.decimals = decimals;
    state.min_deposit = min_deposit;
    state.affiliate_unit = affiliate_unit;
    state.initialized = true;

    msg!("Migration initialized");
    msg!("Minimum deposit: {}", min_deposit);
    msg!("Affiliate unit: {}", affiliate_unit);

    Ok(())
}

/// Arm the general or affiliate phase. Arming twice is a no-op.
pub fn start_phase(state: &mut MigrationState, invocation: &Invocation, phase: Phase) -> Result<()> {
    ensure_owner(state, invocation)?;

    state.set_phase_active(phase);
    msg!("Phase {:?} active", phase);

    Ok(())
}

/// Arm the membership phase once the pool has been funded.
pub fn start_membership_migration(
    state: &mut MigrationState,
    invocation: &Invocation,
    pool: &impl MembershipPool,
) -> Result<()> {
    ensure_owner(state, invocation)?;
    ensure_initialized(state)?;
    require!(pool.balance() > 0, MigrationError::MembershipPoolEmpty);

    state.set_phase_active(Phase::Membership);
    msg!("Phase {:?} active, pool holds {}", Phase::Membership, pool.balance());

    Ok(())
}

/// Record the pre-funded pool. Returns the pool size.
pub fn initialize_memberships(
    state: &mut MigrationState,
    invocation: &Invocation,
    pool: &impl MembershipPool,
) -> Result<u64> {
    ensure_owner(state, invocation)?;
    ensure_initialized(state)?;
    require!(
        !state.memberships_initialized,
        MigrationError::MembershipsAlreadyInitialized
    );

    let pool_size = pool.balance();
    require!(pool_size > 0, MigrationError::MembershipPoolEmpty);

    state.membership_pool_size = pool_size;
    state.memberships_initialized = true;
    msg!("Membership pool initialized with {}", pool_size);

    Ok(pool_size)
}

/// Hand the owner role to `new_owner`. Returns the previous owner.
pub fn transfer_ownership(
    state: &mut MigrationState,
    invocation: &Invocation,
    new_owner: Pubkey,
) -> Result<Pubkey> {
    ensure_owner(state, invocation)?;
    require_keys_neq!(new_owner, Pubkey::default(), MigrationError::ZeroAddress);

    let previous = state.owner;
    state.owner = new_owner;
    msg!("Ownership transferred from {} to {}", previous, new_owner);

    Ok(previous)
}

pub fn deposit(
    state: &mut MigrationState,
    user: &mut UserInfo,
    invocation: &Invocation,
    amount: u128,
    legacy: &mut impl LegacyToken,
) -> Result<()> {
    ensure_initialized(state)?;
    ensure_phase(state, Phase::General)?;
    require!(amount > 0, MigrationError::ZeroAmount);

    // Only the first deposit has to clear the minimum
    let first_deposit = !user.is_tracked();
    if first_deposit {
        require!(amount >= state.min_deposit, MigrationError::BelowMinimumDeposit);
    }

    let deposited = user
        .deposited
        .checked_add(amount)
        .ok_or(MigrationError::ArithmeticOverflow)?;
    let total_deposited = state
        .total_deposited
        .checked_add(amount)
        .ok_or(MigrationError::ArithmeticOverflow)?;

    legacy.pull(&invocation.caller, amount)?;

    if first_deposit {
        user.user = invocation.caller;
        user.anchor_block = invocation.block;
        state.depositor_count = state.depositor_count.saturating_add(1);
    }
    user.deposited = deposited;
    state.total_deposited = total_deposited;

    msg!("Deposited {} (total {})", amount, deposited);

    Ok(())
}

/// Convert the user's whole deposit to new tokens, once. Returns the amount
/// minted.
pub fn claim_tokens(
    state: &mut MigrationState,
    user: &mut UserInfo,
    invocation: &Invocation,
    capabilities: &impl CapabilityChecker,
    new_token: &mut impl NewToken,
) -> Result<u128> {
    ensure_initialized(state)?;
    ensure_phase(state, Phase::General)?;
    require!(user.is_tracked(), MigrationError::NothingDeposited);
    require!(!user.claimed_tokens, MigrationError::AlreadyClaimed);
    require!(user.is_unlocked_at(invocation.block), MigrationError::StillLocked);
    ensure_capabilities(capabilities, Collaborator::NewToken, &invocation.ledger)?;

    let amount = user.deposited;
    let total_claimed = state
        .total_tokens_claimed
        .checked_add(amount)
        .ok_or(MigrationError::ArithmeticOverflow)?;

    new_token.mint(&invocation.caller, amount)?;

    user.claimed_tokens = true;
    state.total_tokens_claimed = total_claimed;

    msg!("✓ Minted {} new tokens", amount);

    Ok(amount)
}

/// Mint one affiliate collectible per affiliate unit deposited that has not
/// been minted yet. Returns the identifiers minted, empty when nothing is
/// pending.
pub fn claim_affiliates(
    state: &mut MigrationState,
    user: &mut UserInfo,
    invocation: &Invocation,
    capabilities: &impl CapabilityChecker,
    affiliates: &mut impl AffiliateCollection,
) -> Result<Vec<u64>> {
    ensure_initialized(state)?;
    ensure_phase(state, Phase::Affiliate)?;

    let eligible = user.eligible_affiliates(state.affiliate_unit);
    let pending = eligible.saturating_sub(user.minted_affiliates);
    if pending == 0 {
        msg!("No affiliates pending");
        return Ok(Vec::new());
    }

    ensure_capabilities(capabilities, Collaborator::Affiliate, &invocation.ledger)?;

    let total_minted = state
        .total_affiliates_minted
        .checked_add(pending)
        .ok_or(MigrationError::ArithmeticOverflow)?;

    let mut ids = Vec::with_capacity(pending as usize);
    for _ in 0..pending {
        ids.push(affiliates.mint(&invocation.caller)?);
    }

    user.minted_affiliates = eligible;
    state.total_affiliates_minted = total_minted;

    msg!("✓ Minted {} affiliates (total {})", pending, eligible);

    Ok(ids)
}

/// Hand one membership from the pool to a qualifying user, once. Returns
/// the memberships left in the pool.
pub fn claim_memberships(
    state: &mut MigrationState,
    user: &mut UserInfo,
    invocation: &Invocation,
    capabilities: &impl CapabilityChecker,
    pool: &mut impl MembershipDistributor,
) -> Result<u64> {
    ensure_initialized(state)?;
    ensure_phase(state, Phase::Membership)?;
    require!(state.memberships_initialized, MigrationError::PoolNotInitialized);
    require!(!user.claimed_membership, MigrationError::AlreadyClaimed);
    require!(user.deposited >= state.min_deposit, MigrationError::InsufficientDeposit);
    require!(user.is_unlocked_at(invocation.block), MigrationError::StillLocked);
    ensure_capabilities(capabilities, Collaborator::Membership, &invocation.ledger)?;

    let available = pool.balance();
    require!(available >= MEMBERSHIPS_PER_CLAIM, MigrationError::MembershipPoolEmpty);

    let claimed = state
        .memberships_claimed
        .checked_add(MEMBERSHIPS_PER_CLAIM)
        .ok_or(MigrationError::ArithmeticOverflow)?;

    pool.transfer(&invocation.caller, MEMBERSHIPS_PER_CLAIM)?;

    user.claimed_membership = true;
    state.memberships_claimed = claimed;

    let remaining = available - MEMBERSHIPS_PER_CLAIM;
    msg!("✓ Membership {} claimed, {} left", MEMBERSHIP_ID, remaining);

    Ok(remaining)
}

pub fn is_migration_active(state: &MigrationState) -> bool {
    state.is_phase_active(Phase::General)
}

fn ensure_owner(state: &MigrationState, invocation: &Invocation) -> Result<()> {
    require_keys_eq!(invocation.caller, state.owner, MigrationError::NotOwner);
    Ok(())
}

fn ensure_initialized(state: &MigrationState) -> Result<()> {
    require!(state.initialized, MigrationError::NotInitialized);
    Ok(())
}

fn ensure_phase(state: &MigrationState, phase: Phase) -> Result<()> {
    if state.is_phase_active(phase) {
        return Ok(());
    }
    let code = match phase {
        Phase::General => MigrationError::MigrationNotActive,
        Phase::Affiliate => MigrationError::AffiliatePhaseInactive,
        Phase::Membership => MigrationError::MembershipPhaseInactive,
    };
    msg!("{:?}: phase {:?} not started", code.kind(), phase);
    Err(error!(code))
}

fn ensure_capabilities(
    checker: &impl CapabilityChecker,
    collaborator: Collaborator,
    holder: &Pubkey,
) -> Result<()> {
    for capability in collaborator.required_capabilities() {
        if !checker.has_capability(collaborator, *capability, holder) {
            let code = match capability {
                Capability::Minter => MigrationError::MissingMinterCapability,
                Capability::Admin => MigrationError::MissingAdminCapability,
            };
            msg!("{:?}: missing {:?} on {:?}", code.kind(), capability, collaborator);
            return Err(error!(code));
        }
    }
    Ok(())
}

pub const MIGRATION_STATE_SEED: &[u8] = b"migration_state";
pub const USER_INFO_SEED: &[u8] = b"user_info";

/// Slots that must elapse after a user's first deposit before the token and
/// membership tracks unlock.
pub const LOCK_BLOCKS: u64 = 256;

/// Whole legacy tokens required for a user's first deposit.
pub const MIN_DEPOSIT_TOKENS: u128 = 4_000;

/// Whole legacy tokens deposited per affiliate collectible.
pub const AFFILIATE_UNIT_TOKENS: u128 = 40_000;

/// Identifier of the single membership tier handed out from the pool.
pub const MEMBERSHIP_ID: u64 = 0;

/// Memberships transferred per successful claim.
pub const MEMBERSHIPS_PER_CLAIM: u64 = 1;

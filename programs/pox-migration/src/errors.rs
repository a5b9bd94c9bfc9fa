use anchor_lang::prelude::*;

#[error_code]
pub enum MigrationError {
    #[msg("Caller is not the migration owner")]
    NotOwner,

    #[msg("Migration contract addresses have already been set")]
    AlreadyInitialized,

    #[msg("Migration contract addresses have not been set")]
    NotInitialized,

    #[msg("Collaborator address must not be the zero address")]
    ZeroAddress,

    #[msg("Migration is not active")]
    MigrationNotActive,

    #[msg("Affiliate migration is not active")]
    AffiliatePhaseInactive,

    #[msg("Membership migration is not active")]
    MembershipPhaseInactive,

    #[msg("Deposit amount must be greater than 0")]
    ZeroAmount,

    #[msg("The minimum deposit amount is 4000 tokens!")]
    BelowMinimumDeposit,

    #[msg("Nothing has been deposited by this user")]
    NothingDeposited,

    #[msg("Deposit is below the amount required for a membership")]
    InsufficientDeposit,

    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Deposit is still locked")]
    StillLocked,

    #[msg("Membership pool has not been initialized")]
    PoolNotInitialized,

    #[msg("Membership pool has already been initialized")]
    MembershipsAlreadyInitialized,

    #[msg("Migration holds no memberships")]
    MembershipPoolEmpty,

    #[msg("Migration lacks the minter capability on the collaborator")]
    MissingMinterCapability,

    #[msg("Migration lacks the admin capability on the collaborator")]
    MissingAdminCapability,

    #[msg("Collectible mints must have 0 decimals")]
    InvalidCollectibleMint,

    #[msg("Token account does not belong to the caller or the expected mint")]
    InvalidTokenAccount,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Amount does not fit in a token transfer")]
    AmountOverflow,
}

/// Broad failure classes surfaced to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller or ledger lacks a required right.
    Authorization,
    /// The phase gating the operation is not armed.
    PhaseInactive,
    /// Something must be set up or supplied before retrying.
    Precondition,
    /// The user's own progress forbids the operation.
    State,
}

impl MigrationError {
    pub fn kind(&self) -> ErrorKind {
        use MigrationError::*;
        match self {
            NotOwner | MissingMinterCapability | MissingAdminCapability => ErrorKind::Authorization,
            MigrationNotActive | AffiliatePhaseInactive | MembershipPhaseInactive => {
                ErrorKind::PhaseInactive
            }
            NotInitialized | ZeroAddress | ZeroAmount | BelowMinimumDeposit
            | InsufficientDeposit | PoolNotInitialized | MembershipPoolEmpty
            | InvalidCollectibleMint | InvalidTokenAccount | ArithmeticOverflow
            | AmountOverflow => ErrorKind::Precondition,
            AlreadyInitialized | MembershipsAlreadyInitialized | NothingDeposited
            | AlreadyClaimed | StillLocked => ErrorKind::State,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(MigrationError::NotOwner.kind(), ErrorKind::Authorization);
        assert_eq!(MigrationError::MissingMinterCapability.kind(), ErrorKind::Authorization);
        assert_eq!(MigrationError::AffiliatePhaseInactive.kind(), ErrorKind::PhaseInactive);
        assert_eq!(MigrationError::BelowMinimumDeposit.kind(), ErrorKind::Precondition);
        assert_eq!(MigrationError::PoolNotInitialized.kind(), ErrorKind::Precondition);
        assert_eq!(MigrationError::StillLocked.kind(), ErrorKind::State);
        assert_eq!(MigrationError::AlreadyClaimed.kind(), ErrorKind::State);
    }
}

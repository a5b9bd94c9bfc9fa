pub mod create;
pub mod initialize;
pub mod start_phase;
pub mod start_membership_migration;
pub mod initialize_memberships;
pub mod transfer_ownership;
pub mod deposit;
pub mod claim_tokens;
pub mod claim_affiliates;
pub mod claim_memberships;
pub mod queries;

pub use create::*;
pub use initialize::*;
pub use start_phase::*;
pub use start_membership_migration::*;
pub use initialize_memberships::*;
pub use transfer_ownership::*;
pub use deposit::*;
pub use claim_tokens::*;
pub use claim_affiliates::*;
pub use claim_memberships::*;
pub use queries::*;

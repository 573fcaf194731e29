use anchor_lang::prelude::*;

use crate::state::AccessControl;

/// Singleton ledger PDA. Owns the access registry and signs for every token
/// vault whose owner is this account.
#[account]
pub struct LedgerState {
    /// Admin and operator set.
    pub access: AccessControl,
    /// Bump of this PDA.
    pub bump: u8,
    /// Bump of the native treasury PDA.
    pub treasury_bump: u8,
    /// Rent-exempt lamports kept in the treasury; never distributable.
    pub treasury_reserve: u64,
}

impl LedgerState {
    pub const SIZE: usize =
        AccessControl::SIZE + // access
        1 +                   // bump
        1 +                   // treasury_bump
        8;                    // treasury_reserve
}

use anchor_lang::prelude::*;

use crate::error::{DistributionError, DistributionResult};

/// What a payout moves: native lamports held by the treasury PDA, or an SPL
/// token held in a vault owned by the ledger PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Native,
    Token { mint: Pubkey },
}

impl Asset {
    /// A token reference must never be the zero key; `Native` is always valid.
    pub fn validate(&self) -> DistributionResult<()> {
        match self {
            Asset::Native => Ok(()),
            Asset::Token { mint } if *mint == Pubkey::default() => {
                Err(DistributionError::InvalidAsset)
            }
            Asset::Token { .. } => Ok(()),
        }
    }

    pub fn mint(&self) -> Option<Pubkey> {
        match self {
            Asset::Native => None,
            Asset::Token { mint } => Some(*mint),
        }
    }
}

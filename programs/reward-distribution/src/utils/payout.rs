//! Payout validation and settlement, independent of how an asset is held.
//!
//! Every request goes through `authorize_*` (role, then structure), then
//! `settle` (aggregate balance pre-flight, then ordered transfers). Nothing
//! moves until all checks have passed.

use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_RECIPIENTS;
use crate::error::{DistributionError, DistributionResult};
use crate::state::{AccessControl, Asset};

/// Outcome reported by an asset ledger for a single transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferStatus {
    Completed,
    Rejected,
}

/// Capability over wherever the ledger's funds of one asset live.
pub trait AssetLedger {
    type Destination;

    /// Current held amount, read live.
    fn held_balance(&self) -> Result<u64>;

    fn transfer(&mut self, to: &Self::Destination, amount: u64) -> Result<TransferStatus>;
}

/// Fields of a destination token account that a payout depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenHolding {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub frozen: bool,
}

/// Operator-gated payout of `amount` to each recipient. Returns the total outflow.
pub fn authorize_distribution(
    access: &AccessControl,
    caller: &Pubkey,
    recipients: &[Pubkey],
    asset: &Asset,
    amount: u64,
) -> DistributionResult<u64> {
    access.require_operator(caller)?;
    check_request(recipients, asset, amount)
}

/// Admin-gated withdrawal. The zero key is refused as a destination.
pub fn authorize_withdrawal(
    access: &AccessControl,
    caller: &Pubkey,
    destination: &Pubkey,
    asset: &Asset,
    amount: u64,
) -> DistributionResult<()> {
    access.require_admin(caller)?;
    check_request(&[*destination], asset, amount)?;
    Ok(())
}

/// Admin-gated token withdrawal into any account of `mint` whose owner is
/// not the zero key.
pub fn authorize_token_withdrawal(
    access: &AccessControl,
    caller: &Pubkey,
    destination: &TokenHolding,
    mint: &Pubkey,
    amount: u64,
) -> DistributionResult<()> {
    authorize_withdrawal(
        access,
        caller,
        &destination.owner,
        &Asset::Token { mint: *mint },
        amount,
    )?;
    check_token_holding(destination, &destination.owner, mint)
}

pub fn check_token_holding(
    holding: &TokenHolding,
    wallet: &Pubkey,
    mint: &Pubkey,
) -> DistributionResult<()> {
    if holding.mint != *mint {
        return Err(DistributionError::InvalidTokenMint);
    }
    if holding.owner != *wallet {
        return Err(DistributionError::RecipientAccountMismatch);
    }
    if holding.frozen {
        return Err(DistributionError::TransferFailed);
    }
    Ok(())
}

/// Structural checks for a payout of `amount` to each of `recipients`.
/// Returns the total outflow.
pub fn check_request(
    recipients: &[Pubkey],
    asset: &Asset,
    amount: u64,
) -> DistributionResult<u64> {
    if recipients.len() > MAX_BATCH_RECIPIENTS {
        return Err(DistributionError::BatchTooLarge);
    }
    if recipients.iter().any(|r| *r == Pubkey::default()) {
        return Err(DistributionError::InvalidRecipient);
    }
    asset.validate()?;
    if amount == 0 {
        return Err(DistributionError::ZeroAmount);
    }
    total_outflow(amount, recipients.len())
}

pub fn total_outflow(amount: u64, recipient_count: usize) -> DistributionResult<u64> {
    let count = u64::try_from(recipient_count).map_err(|_| DistributionError::MathOverflow)?;
    amount
        .checked_mul(count)
        .ok_or(DistributionError::MathOverflow)
}

pub fn check_funds(held: u64, required: u64) -> DistributionResult<()> {
    if held < required {
        return Err(DistributionError::InsufficientBalance);
    }
    Ok(())
}

/// Pays `amount` to every destination, in order, after checking the aggregate
/// requirement against the live balance. `on_paid` runs after each completed
/// transfer with the destination's index. Returns the balance left afterwards.
pub fn settle<L, F>(
    ledger: &mut L,
    destinations: &[L::Destination],
    amount: u64,
    mut on_paid: F,
) -> Result<u64>
where
    L: AssetLedger,
    F: FnMut(usize),
{
    let required = total_outflow(amount, destinations.len())?;
    let held = ledger.held_balance()?;
    check_funds(held, required)?;

    for (index, destination) in destinations.iter().enumerate() {
        match ledger.transfer(destination, amount)? {
            TransferStatus::Completed => on_paid(index),
            TransferStatus::Rejected => return Err(DistributionError::TransferFailed.into()),
        }
    }

    ledger.held_balance()
}

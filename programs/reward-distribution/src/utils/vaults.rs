//! On-chain holdings behind the `AssetLedger` capability.
//!
//! A failing CPI aborts the whole transaction with the callee's error. What
//! can be detected up front (a frozen vault or destination) is reported as
//! `TransferFailed`, and a holding that did not drop by exactly the requested
//! amount is reported as `TransferStatus::Rejected`.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, TREASURY_SEED};
use crate::error::DistributionError;
use crate::utils::payout::{self, AssetLedger, TokenHolding, TransferStatus};

/// Lamports held by the system-owned treasury PDA, above its rent reserve.
pub struct NativeTreasury<'info> {
    treasury: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    bump: u8,
    reserve: u64,
}

impl<'info> NativeTreasury<'info> {
    pub fn new(
        treasury: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        bump: u8,
        reserve: u64,
    ) -> Self {
        Self {
            treasury,
            system_program,
            bump,
            reserve,
        }
    }
}

impl<'info> AssetLedger for NativeTreasury<'info> {
    type Destination = AccountInfo<'info>;

    fn held_balance(&self) -> Result<u64> {
        Ok(distributable(self.treasury.lamports(), self.reserve))
    }

    fn transfer(&mut self, to: &AccountInfo<'info>, amount: u64) -> Result<TransferStatus> {
        let pre = self.treasury.lamports();
        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &[self.bump]]];
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.treasury.clone(),
                    to: to.clone(),
                },
                signer_seeds,
            ),
            amount,
        )?;
        Ok(debited(pre, self.treasury.lamports(), amount))
    }
}

/// SPL tokens held in a vault whose owner is the ledger PDA.
pub struct TokenVault<'a, 'info> {
    vault: &'a mut Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    ledger_bump: u8,
}

impl<'a, 'info> TokenVault<'a, 'info> {
    /// Binds a vault to `mint`, requiring every token account to be present
    /// and the vault to be owned by the ledger PDA.
    pub fn open(
        vault: Option<&'a mut Box<Account<'info, TokenAccount>>>,
        token_program: Option<&Program<'info, Token>>,
        ledger: AccountInfo<'info>,
        ledger_bump: u8,
        mint: &Pubkey,
    ) -> Result<Self> {
        let (Some(vault), Some(token_program)) = (vault, token_program) else {
            return Err(DistributionError::MissingTokenAccounts.into());
        };
        require_keys_eq!(vault.mint, *mint, DistributionError::InvalidTokenMint);
        require_keys_eq!(vault.owner, *ledger.key, DistributionError::InvalidTokenAccount);
        Ok(Self {
            vault: &mut **vault,
            authority: ledger,
            token_program: token_program.to_account_info(),
            ledger_bump,
        })
    }
}

impl<'a, 'info> AssetLedger for TokenVault<'a, 'info> {
    type Destination = AccountInfo<'info>;

    fn held_balance(&self) -> Result<u64> {
        Ok(self.vault.amount)
    }

    fn transfer(&mut self, to: &AccountInfo<'info>, amount: u64) -> Result<TransferStatus> {
        if self.vault.is_frozen() {
            msg!("Vault {} is frozen", self.vault.key());
            return Ok(TransferStatus::Rejected);
        }
        let pre = self.vault.amount;
        let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[self.ledger_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: to.clone(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )?;
        self.vault.reload()?;
        Ok(debited(pre, self.vault.amount, amount))
    }
}

/// Treasury lamports above the rent reserve.
pub fn distributable(lamports: u64, reserve: u64) -> u64 {
    lamports.saturating_sub(reserve)
}

fn debited(pre: u64, post: u64, amount: u64) -> TransferStatus {
    match pre.checked_sub(post) {
        Some(moved) if moved == amount => TransferStatus::Completed,
        _ => TransferStatus::Rejected,
    }
}

pub fn token_holding(account: &TokenAccount) -> TokenHolding {
    TokenHolding {
        owner: account.owner,
        mint: account.mint,
        frozen: account.is_frozen(),
    }
}

/// Native payouts land directly on the recipient wallet.
pub fn native_destination<'info>(
    info: &AccountInfo<'info>,
    wallet: &Pubkey,
) -> Result<AccountInfo<'info>> {
    require_keys_eq!(*info.key, *wallet, DistributionError::RecipientAccountMismatch);
    require!(info.is_writable, DistributionError::RecipientAccountMismatch);
    Ok(info.clone())
}

/// Token payouts land on an unfrozen SPL token account of `mint` owned by `wallet`.
pub fn token_destination<'info>(
    info: &AccountInfo<'info>,
    wallet: &Pubkey,
    mint: &Pubkey,
) -> Result<AccountInfo<'info>> {
    require_keys_eq!(*info.owner, token::ID, DistributionError::InvalidTokenAccount);
    require!(info.is_writable, DistributionError::RecipientAccountMismatch);
    let account = {
        let data = info.try_borrow_data()?;
        TokenAccount::try_deserialize(&mut &data[..])
            .map_err(|_| DistributionError::InvalidTokenAccount)?
    };
    payout::check_token_holding(&token_holding(&account), wallet, mint)?;
    Ok(info.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_debit_completes() {
        assert_eq!(debited(10, 9, 1), TransferStatus::Completed);
        assert_eq!(debited(5, 0, 5), TransferStatus::Completed);
    }

    #[test]
    fn short_or_missing_debit_is_rejected() {
        // Non-standard token that reports success without moving funds.
        assert_eq!(debited(10, 10, 1), TransferStatus::Rejected);
        // Fee-on-transfer style vault drain.
        assert_eq!(debited(10, 8, 1), TransferStatus::Rejected);
        // Balance went up during the transfer.
        assert_eq!(debited(10, 11, 1), TransferStatus::Rejected);
    }

    #[test]
    fn rent_reserve_is_not_distributable() {
        let reserve = 890_880;
        // Fresh treasury topped up at initialization.
        assert_eq!(distributable(reserve, reserve), 0);
        // Receiving 10 lamports makes exactly 10 distributable.
        assert_eq!(distributable(reserve + 10, reserve), 10);
        // Paying out all 10 leaves the reserve behind and nothing distributable.
        assert_eq!(debited(reserve + 10, reserve, 10), TransferStatus::Completed);
        assert_eq!(distributable(reserve, reserve), 0);
        // Lamports below the reserve never show up as a negative balance.
        assert_eq!(distributable(5, reserve), 0);
    }
}

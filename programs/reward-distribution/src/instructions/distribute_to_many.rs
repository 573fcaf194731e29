use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, TREASURY_SEED};
use crate::error::DistributionError;
use crate::instructions::Distributed;
use crate::state::{Asset, LedgerState};
use crate::utils::payout;
use crate::utils::vaults::{self, NativeTreasury, TokenVault};

#[derive(Accounts)]
pub struct DistributeToMany<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut, seeds = [TREASURY_SEED], bump = ledger_state.treasury_bump)]
    pub treasury: SystemAccount<'info>,

    /// Token holding for `Asset::Token`; ownership and mint are checked in-handler.
    #[account(mut)]
    pub vault: Option<Box<Account<'info, TokenAccount>>>,

    pub operator: Signer<'info>,

    pub token_program: Option<Program<'info, Token>>,
    pub system_program: Program<'info, System>,
}

impl<'info> DistributeToMany<'info> {
    /// Pays `amount` to each of `recipients`. Destination accounts are passed
    /// as remaining accounts, one per recipient and in the same order.
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, DistributeToMany<'info>>,
        recipients: Vec<Pubkey>,
        asset: Asset,
        amount: u64,
    ) -> Result<()> {
        let operator = ctx.accounts.operator.key();
        let total = payout::authorize_distribution(
            &ctx.accounts.ledger_state.access,
            &operator,
            &recipients,
            &asset,
            amount,
        )?;

        if recipients.is_empty() {
            emit!(BatchDistributed {
                operator,
                asset,
                amount,
                recipient_count: 0,
                total: 0,
            });
            return Ok(());
        }

        require!(
            ctx.remaining_accounts.len() == recipients.len(),
            DistributionError::RecipientAccountMismatch
        );
        let destinations = recipients
            .iter()
            .zip(ctx.remaining_accounts.iter())
            .map(|(wallet, info)| match asset {
                Asset::Native => vaults::native_destination(info, wallet),
                Asset::Token { mint } => vaults::token_destination(info, wallet, &mint),
            })
            .collect::<Result<Vec<_>>>()?;

        let ledger_info = ctx.accounts.ledger_state.to_account_info();
        let ledger_bump = ctx.accounts.ledger_state.bump;
        let treasury_bump = ctx.accounts.ledger_state.treasury_bump;
        let treasury_reserve = ctx.accounts.ledger_state.treasury_reserve;

        let on_paid = |index: usize| {
            emit!(Distributed {
                operator,
                recipient: recipients[index],
                asset,
                amount,
                index: index as u16,
            });
        };

        let accounts = &mut *ctx.accounts;
        let remaining = match asset {
            Asset::Native => {
                let mut treasury = NativeTreasury::new(
                    accounts.treasury.to_account_info(),
                    accounts.system_program.to_account_info(),
                    treasury_bump,
                    treasury_reserve,
                );
                payout::settle(&mut treasury, &destinations, amount, on_paid)?
            }
            Asset::Token { mint } => {
                let mut vault = TokenVault::open(
                    accounts.vault.as_mut(),
                    accounts.token_program.as_ref(),
                    ledger_info,
                    ledger_bump,
                    &mint,
                )?;
                payout::settle(&mut vault, &destinations, amount, on_paid)?
            }
        };

        emit!(BatchDistributed {
            operator,
            asset,
            amount,
            recipient_count: recipients.len() as u16,
            total,
        });
        msg!(
            "Distributed {} to {} recipients, ledger holds {}",
            total,
            recipients.len(),
            remaining
        );
        Ok(())
    }
}

#[event]
pub struct BatchDistributed {
    pub operator: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    pub recipient_count: u16,
    pub total: u64,
}

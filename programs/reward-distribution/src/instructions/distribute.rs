use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_SEED, TREASURY_SEED};
use crate::state::{Asset, LedgerState};
use crate::utils::payout;
use crate::utils::vaults::{self, NativeTreasury, TokenVault};

#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut, seeds = [TREASURY_SEED], bump = ledger_state.treasury_bump)]
    pub treasury: SystemAccount<'info>,

    /// Token holding for `Asset::Token`; ownership and mint are checked in-handler.
    #[account(mut)]
    pub vault: Option<Box<Account<'info, TokenAccount>>>,

    /// CHECK: Recipient wallet (native) or recipient token account (token),
    /// validated against `recipient` and `asset` in-handler.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    pub operator: Signer<'info>,

    pub token_program: Option<Program<'info, Token>>,
    pub system_program: Program<'info, System>,
}

impl<'info> Distribute<'info> {
    pub fn handle(
        ctx: Context<Distribute>,
        recipient: Pubkey,
        asset: Asset,
        amount: u64,
    ) -> Result<()> {
        let operator = ctx.accounts.operator.key();
        payout::authorize_distribution(
            &ctx.accounts.ledger_state.access,
            &operator,
            &[recipient],
            &asset,
            amount,
        )?;

        let ledger_info = ctx.accounts.ledger_state.to_account_info();
        let ledger_bump = ctx.accounts.ledger_state.bump;
        let treasury_bump = ctx.accounts.ledger_state.treasury_bump;
        let treasury_reserve = ctx.accounts.ledger_state.treasury_reserve;

        let on_paid = |index: usize| {
            emit!(Distributed {
                operator,
                recipient,
                asset,
                amount,
                index: index as u16,
            });
        };

        let accounts = &mut *ctx.accounts;
        let remaining = match asset {
            Asset::Native => {
                let destination = vaults::native_destination(&accounts.destination, &recipient)?;
                let mut treasury = NativeTreasury::new(
                    accounts.treasury.to_account_info(),
                    accounts.system_program.to_account_info(),
                    treasury_bump,
                    treasury_reserve,
                );
                payout::settle(&mut treasury, &[destination], amount, on_paid)?
            }
            Asset::Token { mint } => {
                let destination =
                    vaults::token_destination(&accounts.destination, &recipient, &mint)?;
                let mut vault = TokenVault::open(
                    accounts.vault.as_mut(),
                    accounts.token_program.as_ref(),
                    ledger_info,
                    ledger_bump,
                    &mint,
                )?;
                payout::settle(&mut vault, &[destination], amount, on_paid)?
            }
        };

        msg!("Distributed {} to {}, ledger holds {}", amount, recipient, remaining);
        Ok(())
    }
}

/// One per recipient payout, in payout order.
#[event]
pub struct Distributed {
    pub operator: Pubkey,
    pub recipient: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    pub index: u16,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::LEDGER_SEED;
use crate::instructions::Withdrawn;
use crate::state::{Asset, LedgerState};
use crate::utils::payout;
use crate::utils::vaults::{self, TokenVault};

#[derive(Accounts)]
pub struct WithdrawToken<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Any token account chosen by the admin; its owner must not be the zero key.
    #[account(mut)]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawToken<'info> {
    pub fn handle(ctx: Context<WithdrawToken>, mint: Pubkey, amount: u64) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let holding = vaults::token_holding(&ctx.accounts.destination);
        payout::authorize_token_withdrawal(
            &ctx.accounts.ledger_state.access,
            &admin,
            &holding,
            &mint,
            amount,
        )?;

        let ledger_info = ctx.accounts.ledger_state.to_account_info();
        let ledger_bump = ctx.accounts.ledger_state.bump;
        let destination = ctx.accounts.destination.to_account_info();

        let accounts = &mut *ctx.accounts;
        let mut vault = TokenVault::open(
            Some(&mut accounts.vault),
            Some(&accounts.token_program),
            ledger_info,
            ledger_bump,
            &mint,
        )?;
        let remaining = payout::settle(&mut vault, &[destination], amount, |_| {})?;

        emit!(Withdrawn {
            admin,
            destination: holding.owner,
            asset: Asset::Token { mint },
            amount,
            remaining,
        });
        Ok(())
    }
}

use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, TREASURY_SEED};
use crate::state::{Asset, LedgerState};
use crate::utils::payout;
use crate::utils::vaults::NativeTreasury;

#[derive(Accounts)]
pub struct WithdrawNative<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut, seeds = [TREASURY_SEED], bump = ledger_state.treasury_bump)]
    pub treasury: SystemAccount<'info>,

    /// CHECK: Any wallet chosen by the admin; only the zero key is refused.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawNative<'info> {
    pub fn handle(ctx: Context<WithdrawNative>, amount: u64) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let to = ctx.accounts.destination.key();
        payout::authorize_withdrawal(
            &ctx.accounts.ledger_state.access,
            &admin,
            &to,
            &Asset::Native,
            amount,
        )?;

        let st = &ctx.accounts.ledger_state;
        let mut treasury = NativeTreasury::new(
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            st.treasury_bump,
            st.treasury_reserve,
        );
        let destination = ctx.accounts.destination.to_account_info();
        let remaining = payout::settle(&mut treasury, &[destination], amount, |_| {})?;

        emit!(Withdrawn {
            admin,
            destination: to,
            asset: Asset::Native,
            amount,
            remaining,
        });
        Ok(())
    }
}

/// Shared by native and token withdrawals.
#[event]
pub struct Withdrawn {
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    pub remaining: u64,
}

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{LEDGER_SEED, TREASURY_SEED};
use crate::state::{AccessControl, LedgerState};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut, seeds = [TREASURY_SEED], bump)]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Fixes the admin and tops the treasury up to its rent-exempt reserve so
    /// that any later deposit, however small, is accepted.
    pub fn handle(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        let access = AccessControl::new(admin)?;

        let reserve = Rent::get()?.minimum_balance(0);
        let top_up = reserve.saturating_sub(ctx.accounts.treasury.lamports());
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.payer.to_account_info(),
                        to: ctx.accounts.treasury.to_account_info(),
                    },
                ),
                top_up,
            )?;
        }

        let st = &mut ctx.accounts.ledger_state;
        st.access = access;
        st.bump = ctx.bumps.ledger_state;
        st.treasury_bump = ctx.bumps.treasury;
        st.treasury_reserve = reserve;

        msg!("Ledger initialized, admin: {}", admin);
        msg!("Treasury reserve: {} lamports", reserve);

        emit!(LedgerInitialized {
            admin,
            ledger: st.key(),
            treasury: ctx.accounts.treasury.key(),
            treasury_reserve: reserve,
        });

        Ok(())
    }
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub ledger: Pubkey,
    pub treasury: Pubkey,
    pub treasury_reserve: u64,
}

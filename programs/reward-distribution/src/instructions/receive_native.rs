use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{LEDGER_SEED, TREASURY_SEED};
use crate::state::LedgerState;
use crate::utils::vaults;

#[derive(Accounts)]
pub struct ReceiveNative<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut, seeds = [TREASURY_SEED], bump = ledger_state.treasury_bump)]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ReceiveNative<'info> {
    /// Open to any signer. Lamports sent straight to the treasury address are
    /// held the same way; this entrypoint only adds the event.
    pub fn handle(ctx: Context<ReceiveNative>, amount: u64) -> Result<()> {
        if amount > 0 {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.payer.to_account_info(),
                        to: ctx.accounts.treasury.to_account_info(),
                    },
                ),
                amount,
            )?;
        }

        emit!(NativeReceived {
            from: ctx.accounts.payer.key(),
            amount,
            treasury_balance: vaults::distributable(
                ctx.accounts.treasury.lamports(),
                ctx.accounts.ledger_state.treasury_reserve,
            ),
        });
        Ok(())
    }
}

#[event]
pub struct NativeReceived {
    pub from: Pubkey,
    pub amount: u64,
    /// Distributable lamports after the deposit.
    pub treasury_balance: u64,
}

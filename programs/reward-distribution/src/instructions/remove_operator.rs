use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::LedgerState;

#[derive(Accounts)]
pub struct RemoveOperator<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    pub admin: Signer<'info>,
}

impl<'info> RemoveOperator<'info> {
    pub fn handle(ctx: Context<RemoveOperator>, operator: Pubkey) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let access = &mut ctx.accounts.ledger_state.access;
        access.require_admin(&admin)?;

        if !access.remove_operator(&operator) {
            msg!("{} is not an operator", operator);
            return Ok(());
        }

        emit!(OperatorRemoved {
            admin,
            operator,
            operator_count: access.operator_count,
        });
        Ok(())
    }
}

#[event]
pub struct OperatorRemoved {
    pub admin: Pubkey,
    pub operator: Pubkey,
    pub operator_count: u8,
}

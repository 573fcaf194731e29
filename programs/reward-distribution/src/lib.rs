use anchor_lang::prelude::*;

declare_id!("8DjHd3ek1NYmwUaKa4gqdDQViD6C7jJRjLaudsJsxVd1");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::Asset;

#[program]
pub mod reward_distribution {
    use super::*;

    /// Creates the ledger with a fixed admin and an empty operator set.
    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        Initialize::handle(ctx, admin)
    }

    /// Admin only. Idempotent.
    pub fn add_operator(ctx: Context<AddOperator>, operator: Pubkey) -> Result<()> {
        AddOperator::handle(ctx, operator)
    }

    /// Admin only. Removing a non-member is a no-op.
    pub fn remove_operator(ctx: Context<RemoveOperator>, operator: Pubkey) -> Result<()> {
        RemoveOperator::handle(ctx, operator)
    }

    pub fn receive_native(ctx: Context<ReceiveNative>, amount: u64) -> Result<()> {
        ReceiveNative::handle(ctx, amount)
    }

    /// Operator only.
    pub fn distribute(
        ctx: Context<Distribute>,
        recipient: Pubkey,
        asset: Asset,
        amount: u64,
    ) -> Result<()> {
        Distribute::handle(ctx, recipient, asset, amount)
    }

    /// Operator only. Every recipient receives `amount`, all or none.
    pub fn distribute_to_many<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeToMany<'info>>,
        recipients: Vec<Pubkey>,
        asset: Asset,
        amount: u64,
    ) -> Result<()> {
        DistributeToMany::handle(ctx, recipients, asset, amount)
    }

    /// Admin only.
    pub fn withdraw_native(ctx: Context<WithdrawNative>, amount: u64) -> Result<()> {
        WithdrawNative::handle(ctx, amount)
    }

    /// Admin only.
    pub fn withdraw_token(ctx: Context<WithdrawToken>, mint: Pubkey, amount: u64) -> Result<()> {
        WithdrawToken::handle(ctx, mint, amount)
    }
}

use anchor_lang::prelude::*;

/// Custom error codes for the reward distribution program.
#[error_code]
pub enum DistributionError {
    #[msg("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[msg("Invalid recipient (zero address)")]
    InvalidRecipient,

    #[msg("Invalid asset (zero token reference)")]
    InvalidAsset,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Insufficient balance held by the ledger")]
    InsufficientBalance,

    #[msg("Underlying asset transfer failed")]
    TransferFailed,

    #[msg("Invalid admin public key")]
    InvalidAdmin,

    #[msg("Invalid operator public key")]
    InvalidOperator,

    #[msg("Operator set is full")]
    OperatorSetFull,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Destination account does not match recipient")]
    RecipientAccountMismatch,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Token vault, mint and token program accounts are required for token assets")]
    MissingTokenAccounts,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the runtime-independent checks.
pub type DistributionResult<T> = std::result::Result<T, DistributionError>;

//! Program-wide constants.

/// Seed of the ledger state PDA. The same PDA owns every token vault.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed of the system-owned PDA that holds native lamports.
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Capacity of the operator set stored in the ledger state.
pub const MAX_OPERATORS: usize = 16;

/// Max recipients paid by a single `distribute_to_many` call.
pub const MAX_BATCH_RECIPIENTS: usize = 20;

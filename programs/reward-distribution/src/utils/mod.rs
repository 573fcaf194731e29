pub mod payout;
pub mod vaults;

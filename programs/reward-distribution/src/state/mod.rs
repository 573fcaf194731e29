pub mod access_control;
pub mod asset;
pub mod ledger_state;

pub use access_control::*;
pub use asset::*;
pub use ledger_state::*;

pub mod initialize;
pub mod add_operator;
pub mod remove_operator;
pub mod receive_native;
pub mod distribute;
pub mod distribute_to_many;
pub mod withdraw_native;
pub mod withdraw_token;

pub use initialize::*;
pub use add_operator::*;
pub use remove_operator::*;
pub use receive_native::*;
pub use distribute::*;
pub use distribute_to_many::*;
pub use withdraw_native::*;
pub use withdraw_token::*;

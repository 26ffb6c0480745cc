pub mod initialize;
pub mod add_user;
pub mod remove_user;
pub mod claim;
pub mod fund_pool;
pub mod emit_vesting_quote;

pub use initialize::*;
pub use add_user::*;
pub use remove_user::*;
pub use claim::*;
pub use fund_pool::*;
pub use emit_vesting_quote::*;

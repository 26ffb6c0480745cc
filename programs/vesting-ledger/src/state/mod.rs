pub mod ledger_state;
pub mod roster;

pub use ledger_state::*;
pub use roster::*;

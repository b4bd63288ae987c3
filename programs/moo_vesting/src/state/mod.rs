pub mod claim_record;
pub mod unlock_schedule;
pub mod vesting_state;

pub use claim_record::*;
pub use unlock_schedule::*;
pub use vesting_state::*;

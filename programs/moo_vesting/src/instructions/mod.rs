pub mod claim;
pub mod create_vesting;
pub mod set_tge_timestamp;
pub mod withdraw;

pub use claim::*;
pub use create_vesting::*;
pub use set_tge_timestamp::*;
pub use withdraw::*;

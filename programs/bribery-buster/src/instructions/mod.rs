pub mod initialize;
pub use initialize::*;

pub mod submit_report;
pub use submit_report::*;

pub mod reward_user;
pub use reward_user::*;

pub mod report;
pub use report::*;

pub mod treasury;
pub use treasury::*;

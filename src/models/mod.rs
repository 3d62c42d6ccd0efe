pub mod filter;
pub mod stats;
pub mod task;
pub mod weather;

pub use filter::*;
pub use stats::*;
pub use task::*;
pub use weather::*;

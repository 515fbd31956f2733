//! Process Runner Implementations

mod system;

pub use system::SystemRunner;

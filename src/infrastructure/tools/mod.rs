//! External Tool Clients
//!
//! Typed wrappers that turn tool operations into `Invocation`s and hand
//! them to a `ProcessRunner`.

mod git;
mod yarn;

pub use git::{GitClient, GitIdentity};
pub use yarn::YarnClient;

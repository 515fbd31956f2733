//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File transfer and isolated workspaces
//! - `process/` - Process runner backed by `std::process`
//! - `tools/` - Typed clients for the package fetcher (yarn) and git

pub mod fs;
pub mod process;
pub mod tools;

// Re-export for convenience
pub use fs::{copy_file, Workspace, WorkspaceManager};
pub use process::SystemRunner;
pub use tools::{GitClient, GitIdentity, YarnClient};

//! File System Implementations
//!
//! Single-file transfer and scratch workspace management.

mod transfer;
mod workspace;

pub use transfer::copy_file;
pub use workspace::{Workspace, WorkspaceManager, EMPTY_MANIFEST, MANIFEST_FILE};

//! Isolated workspaces
//!
//! Each publish stages its package fetch and repository checkout in
//! throwaway directories. They are removed when the `Workspace` guard drops,
//! on success and on error alike, unless retention was requested for
//! post-mortem inspection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

/// Package manifest file seeded into fetch workspaces
pub const MANIFEST_FILE: &str = "package.json";

/// Contents of a freshly seeded manifest
pub const EMPTY_MANIFEST: &str = "{}";

/// Hands out isolated scratch directories
#[derive(Debug, Clone, Default)]
pub struct WorkspaceManager {
    keep: bool,
    root: Option<PathBuf>,
}

impl WorkspaceManager {
    /// `keep` retains workspaces after use instead of deleting them
    pub fn new(keep: bool) -> Self {
        Self { keep, root: None }
    }

    /// Create workspaces under `root` instead of the system temp directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Create a new empty workspace whose directory name starts with `prefix`
    pub fn acquire(&self, prefix: &str) -> io::Result<Workspace> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix);
        let dir = match &self.root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        debug!(path = %dir.path().display(), "acquired workspace");
        Ok(Workspace {
            path: dir.path().to_path_buf(),
            dir: Some(dir),
            keep: self.keep,
        })
    }
}

/// A scratch directory owned by one operation
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    dir: Option<TempDir>,
    keep: bool,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.path.join(rel)
    }

    /// Write an empty package manifest so the fetcher treats this
    /// directory as its project root
    pub fn seed_manifest(&self) -> io::Result<()> {
        fs::write(self.path.join(MANIFEST_FILE), EMPTY_MANIFEST)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        if self.keep {
            let kept = dir.keep();
            info!(path = %kept.display(), "keeping workspace");
        } else if let Err(e) = dir.close() {
            debug!(path = %self.path.display(), error = %e, "failed to remove workspace");
        }
    }
}

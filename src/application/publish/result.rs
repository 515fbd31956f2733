//! Publish Result

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Whether a publish produced a new commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    /// Tracked tree changed; committed and pushed
    Committed,
    /// Tracked tree already matched; nothing committed
    Unchanged,
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStatus::Committed => write!(f, "committed"),
            PublishStatus::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Result of publishing one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishResult {
    pub version: String,
    /// Versioned artifact location (`output_base_dir/version`)
    pub target_dir: PathBuf,
    pub status: PublishStatus,
}

impl PublishResult {
    pub fn is_committed(&self) -> bool {
        self.status == PublishStatus::Committed
    }
}

//! ResolvedVersionSet entity - a package's published versions and dist-tags

use serde::Serialize;

/// Versions and distribution tags reported by the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedVersionSet {
    /// All published versions, in registry order
    pub versions: Vec<String>,
    /// Version the `latest` tag points to (empty when untagged)
    pub latest_tag: String,
    /// Version the `beta` tag points to (empty when untagged)
    pub beta_tag: String,
}

impl ResolvedVersionSet {
    pub fn new(versions: Vec<String>, latest_tag: String, beta_tag: String) -> Self {
        Self {
            versions,
            latest_tag,
            beta_tag,
        }
    }

    /// The `latest` tag, if the registry reported one
    pub fn latest(&self) -> Option<&str> {
        Some(self.latest_tag.as_str()).filter(|t| !t.is_empty())
    }

    /// The `beta` tag, if the registry reported one
    pub fn beta(&self) -> Option<&str> {
        Some(self.beta_tag.as_str()).filter(|t| !t.is_empty())
    }
}

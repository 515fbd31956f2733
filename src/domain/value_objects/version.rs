//! Version value objects
//!
//! A build request names either a concrete upstream version or the
//! `latest` sentinel, which is resolved against the registry first.

use crate::error::{ForgeError, ForgeResult};

/// Sentinel requesting the registry's `latest` distribution tag
pub const LATEST: &str = "latest";

/// Requested version of an upstream package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    /// Resolve the `latest` distribution tag before publishing
    Latest,
    /// Publish this version verbatim (existence is not checked up front)
    Exact(String),
}

impl VersionSpec {
    /// Parse a requested version; empty input is rejected.
    pub fn parse(raw: &str) -> ForgeResult<Self> {
        match raw {
            "" => Err(ForgeError::validation("version", "must be specified")),
            LATEST => Ok(VersionSpec::Latest),
            other => Ok(VersionSpec::Exact(other.to_string())),
        }
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_ident(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Identifier of the generated unit for one artifact version,
/// e.g. `jquery_3_6_0`.
pub fn module_ident(artifact_name: &str, version: &str) -> String {
    format!("{}_{}", artifact_name, sanitize_ident(version))
}

//! Version Resolver
//!
//! Asks the registry (through `yarn info --json`) for every published
//! version of a package plus its `latest` and `beta` distribution tags.

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::entities::ResolvedVersionSet;
use crate::error::{ForgeError, ForgeResult};
use crate::infrastructure::{WorkspaceManager, YarnClient};

/// Record type carrying the registry inspection result
pub const INSPECT_RECORD: &str = "inspect";

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
struct InspectData {
    #[serde(rename = "dist-tags", default)]
    dist_tags: DistTags,
    #[serde(default)]
    versions: Vec<String>,
}

/// A missing or `null` tag means the registry has no such tag
#[derive(Debug, Default, Deserialize)]
struct DistTags {
    #[serde(default)]
    latest: Option<String>,
    #[serde(default)]
    beta: Option<String>,
}

/// Scan line-delimited JSON output for the first `inspect` record.
///
/// Blank lines are skipped instead of failing to decode. Any other line that
/// fails to decode aborts the scan with `Decode`; no `inspect` record at all
/// is `NotFound`.
pub fn scan_inspect_records(output: &[u8]) -> ForgeResult<ResolvedVersionSet> {
    for line in output.split(|b| *b == b'\n') {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let record: Record = serde_json::from_slice(line)?;
        if record.kind != INSPECT_RECORD {
            continue;
        }
        let data: InspectData = if record.data.is_null() {
            InspectData::default()
        } else {
            serde_json::from_value(record.data)?
        };
        return Ok(ResolvedVersionSet::new(
            data.versions,
            data.dist_tags.latest.unwrap_or_default(),
            data.dist_tags.beta.unwrap_or_default(),
        ));
    }
    Err(ForgeError::NotFound(
        "no inspect record in registry output".to_string(),
    ))
}

/// Resolves package versions through a throwaway manifest context
pub struct VersionResolver {
    yarn: YarnClient,
    workspaces: WorkspaceManager,
}

impl VersionResolver {
    pub fn new(yarn: YarnClient, workspaces: WorkspaceManager) -> Self {
        Self { yarn, workspaces }
    }

    pub fn resolve(&self, package_name: &str) -> ForgeResult<ResolvedVersionSet> {
        info!(package = package_name, "fetching versions");
        let workspace = self.workspaces.acquire("libforge-versions-")?;
        workspace.seed_manifest()?;

        let output = self.yarn.info_json(workspace.path(), package_name)?;
        let set = scan_inspect_records(&output).map_err(|e| match e {
            ForgeError::NotFound(_) => ForgeError::NotFound(format!(
                "registry returned no inspect record for '{}'",
                package_name
            )),
            other => other,
        })?;

        debug!(versions = ?set.versions, "available versions");
        info!(
            package = package_name,
            latest = set.latest_tag.as_str(),
            beta = set.beta_tag.as_str(),
            "resolved"
        );
        Ok(set)
    }
}

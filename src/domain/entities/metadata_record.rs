//! MetadataRecord entity - the descriptor embedded in a generated unit

use crate::domain::entities::BuildRequest;
use crate::domain::value_objects::{module_ident, AssetType};
use crate::error::ForgeResult;

/// Registry descriptor for one artifact version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub asset_type: AssetType,
    pub name: String,
    pub version: String,
    pub file_name: String,
    pub deps: Vec<String>,
}

impl MetadataRecord {
    /// Describe `request` published at `version`.
    ///
    /// `deps` stays empty: the request's `js_deps`/`css_deps` are accepted
    /// but not forwarded into the record. Fails only when the request has
    /// no asset type.
    pub fn for_request(request: &BuildRequest, version: &str) -> ForgeResult<Self> {
        Ok(Self {
            asset_type: request.asset_type()?,
            name: request.artifact_name.clone(),
            version: version.to_string(),
            file_name: request.file_name().to_string(),
            deps: Vec::new(),
        })
    }

    /// Identifier of the generated unit, e.g. `jquery_3_6_0`
    pub fn module_ident(&self) -> String {
        module_ident(&self.name, &self.version)
    }
}

//! Default library manifest
//!
//! The stock set of front-end libraries `build-all` packages, each at its
//! `latest` version.

use std::path::Path;

use crate::domain::entities::BuildRequest;
use crate::domain::value_objects::AssetType;

/// `(package, file inside the package, artifact name, type)`
const DEFAULT_LIBRARIES: &[(&str, &str, &str, AssetType)] = &[
    ("jquery", "dist/jquery.js", "jquery", AssetType::Js),
    ("vue", "dist/vue.js", "vue", AssetType::Js),
    ("underscore", "underscore.js", "underscore", AssetType::Js),
    ("bootstrap", "dist/css/bootstrap.css", "bootstrap", AssetType::Css),
];

/// Requests for every default library, each publishing under
/// `out_dir/<artifact_name>`
pub fn default_manifest(out_dir: &Path) -> Vec<BuildRequest> {
    DEFAULT_LIBRARIES
        .iter()
        .map(|&(package, file, name, asset_type)| {
            BuildRequest::new(package, file, out_dir.join(name), name, asset_type)
        })
        .collect()
}

//! Asset type value object - the kind of front-end file being packaged

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of asset carried by an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// JavaScript file
    Js,
    /// Stylesheet
    Css,
}

impl AssetType {
    /// Value recorded in the generated metadata record
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Js => "js",
            AssetType::Css => "css",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

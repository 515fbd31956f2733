//! BuildRequest entity - what to package, from where, and into which directory

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AssetType, VersionSpec, LATEST};
use crate::error::{ForgeError, ForgeResult};

/// Input to one build: a single file out of one registry package.
///
/// Field names follow the JSON request format; the legacy names
/// (`src_name`, `go_name`, `type`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Package name in the registry, e.g. `jquery`
    #[serde(default, alias = "src_name")]
    pub package_name: String,
    /// File inside the fetched package, e.g. `dist/jquery.js`
    #[serde(default, alias = "src_file_path")]
    pub source_file_path: String,
    /// Absolute directory receiving one subdirectory per version
    #[serde(default, alias = "out_base_dir")]
    pub output_base_dir: PathBuf,
    /// Logical artifact name; prefixes the generated module identifier
    #[serde(default, alias = "go_name")]
    pub artifact_name: String,
    /// `js` or `css`; required, checked by `validate`
    #[serde(default, alias = "type")]
    pub asset_type: Option<AssetType>,
    /// JS dependency ranges keyed by other artifact names (recorded only)
    #[serde(default)]
    pub js_deps: Vec<String>,
    /// CSS dependency ranges keyed by other artifact names (recorded only)
    #[serde(default)]
    pub css_deps: Vec<String>,
    /// Extra paths emitted as `use` lines in the generated unit
    #[serde(default, alias = "go_imports")]
    pub imports: Vec<String>,
    /// Concrete version or `latest`
    #[serde(default)]
    pub version: String,
}

impl BuildRequest {
    /// Create a request for the `latest` version of a package
    pub fn new(
        package_name: impl Into<String>,
        source_file_path: impl Into<String>,
        output_base_dir: impl Into<PathBuf>,
        artifact_name: impl Into<String>,
        asset_type: AssetType,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            source_file_path: source_file_path.into(),
            output_base_dir: output_base_dir.into(),
            artifact_name: artifact_name.into(),
            asset_type: Some(asset_type),
            js_deps: Vec::new(),
            css_deps: Vec::new(),
            imports: Vec::new(),
            version: LATEST.to_string(),
        }
    }

    /// Decode a request from its JSON form
    pub fn from_json(json: &str) -> ForgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_output_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_base_dir = dir.into();
        self
    }

    pub fn with_js_deps(mut self, deps: Vec<String>) -> Self {
        self.js_deps = deps;
        self
    }

    pub fn with_css_deps(mut self, deps: Vec<String>) -> Self {
        self.css_deps = deps;
        self
    }

    pub fn with_imports(mut self, imports: Vec<String>) -> Self {
        self.imports = imports;
        self
    }

    /// Check required fields and path shapes
    pub fn validate(&self) -> ForgeResult<()> {
        self.version_spec()?;
        self.validate_location()
    }

    /// Check everything except `version`: what to fetch and where it goes
    pub fn validate_location(&self) -> ForgeResult<()> {
        if self.package_name.trim().is_empty() {
            return Err(ForgeError::validation("package_name", "must not be empty"));
        }
        if self.artifact_name.trim().is_empty() {
            return Err(ForgeError::validation("artifact_name", "must not be empty"));
        }
        self.asset_type()?;
        if self.output_base_dir.as_os_str().is_empty() {
            return Err(ForgeError::validation("output_base_dir", "must not be empty"));
        }
        if !self.output_base_dir.is_absolute() {
            return Err(ForgeError::validation(
                "output_base_dir",
                format!("must be absolute, got {}", self.output_base_dir.display()),
            ));
        }
        self.validate_source_path()
    }

    fn validate_source_path(&self) -> ForgeResult<()> {
        let path = Path::new(&self.source_file_path);
        if self.source_file_path.is_empty() {
            return Err(ForgeError::validation("source_file_path", "must not be empty"));
        }
        if path.is_absolute() {
            return Err(ForgeError::validation(
                "source_file_path",
                "must be relative to the package root",
            ));
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(ForgeError::validation(
                "source_file_path",
                "must stay inside the package",
            ));
        }
        if self.file_name().is_empty() {
            return Err(ForgeError::validation("source_file_path", "must name a file"));
        }
        Ok(())
    }

    /// The requested asset type; `Validation` when it is missing
    pub fn asset_type(&self) -> ForgeResult<AssetType> {
        self.asset_type
            .ok_or_else(|| ForgeError::validation("asset_type", "must be specified"))
    }

    /// Parsed form of `version`
    pub fn version_spec(&self) -> ForgeResult<VersionSpec> {
        VersionSpec::parse(&self.version)
    }

    /// Base name of the source file; the name it is published under
    pub fn file_name(&self) -> &str {
        Path::new(&self.source_file_path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
    }

    /// `name@version` argument for the package fetcher
    pub fn package_spec(&self, version: &str) -> String {
        format!("{}@{}", self.package_name, version)
    }

    /// Versioned artifact location for `version`
    pub fn target_dir(&self, version: &str) -> PathBuf {
        self.output_base_dir.join(version)
    }

    /// Location of the source file inside a fetch workspace
    pub fn fetched_file(&self, fetch_root: &Path) -> PathBuf {
        fetch_root
            .join("node_modules")
            .join(&self.package_name)
            .join(&self.source_file_path)
    }
}

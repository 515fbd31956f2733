//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_REGISTRY_CRATE;
use crate::error::ForgeResult;

use super::loader::{self, ConfigWarning};

/// External tool locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_yarn")]
    pub yarn: String,

    #[serde(default = "default_git")]
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            yarn: default_yarn(),
            git: default_git(),
        }
    }
}

fn default_yarn() -> String {
    "yarn".to_string()
}

fn default_git() -> String {
    "git".to_string()
}

/// Publish behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Keep fetch and checkout workspaces for inspection
    #[serde(default)]
    pub keep_temp: bool,

    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub author_email: Option<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            commit_message: default_commit_message(),
            keep_temp: false,
            author_name: None,
            author_email: None,
        }
    }
}

fn default_commit_message() -> String {
    "latest and greatest".to_string()
}

/// Generated unit settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Crate path the generated `lib.rs` imports its registry types from
    #[serde(default = "default_registry_crate")]
    pub registry_crate: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            registry_crate: default_registry_crate(),
        }
    }
}

fn default_registry_crate() -> String {
    DEFAULT_REGISTRY_CRATE.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a repeated `-v` flag onto a level; zero keeps `Normal`
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub codegen: CodegenConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ForgeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ForgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, `./libforge.toml`, the user config, or defaults
    pub fn load_or_default(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> ForgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit, project_root)
    }

    /// Apply environment variable overrides (LIBFORGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}

//! Configuration module for libforge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIBFORGE_*)
//! 3. Explicit `--config` file, or `./libforge.toml`
//! 4. User config (`<config dir>/libforge/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CodegenConfig, Config, OutputConfig, PublishConfig, ToolsConfig, Verbosity};

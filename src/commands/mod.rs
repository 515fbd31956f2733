//! Command handlers

pub mod build;
pub mod versions;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use libforge::config::{Config, Verbosity};
use libforge::presentation::Cli;

/// Resolve configuration for this run, apply CLI flags on top and install
/// logging at the resulting verbosity.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref(), Some(cwd.as_path()))
        .context("failed to load configuration")?;

    if cli.keep_temp {
        config.publish.keep_temp = true;
    }
    if cli.verbose > 0 {
        config.output.verbosity = Verbosity::from_count(cli.verbose);
    }

    libforge::logging::init(config.output.verbosity);

    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match w.suggestion {
            Some(s) => warn!("unknown config key '{}' at {} (did you mean '{}'?)", w.key, location, s),
            None => warn!("unknown config key '{}' at {}", w.key, location),
        }
    }

    Ok(config)
}

/// Anchor a relative path at the current directory
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() || path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(cwd.join(path))
}

//! `versions` command handler

use anyhow::{Context, Result};

use libforge::config::Config;
use libforge::presentation::factory;

pub fn cmd_versions(package: &str, config: &Config, json: bool) -> Result<()> {
    let set = factory::create_version_resolver(config)
        .resolve(package)
        .with_context(|| format!("cannot resolve versions of '{}'", package))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    println!("latest: {}", set.latest().unwrap_or("-"));
    println!("beta:   {}", set.beta().unwrap_or("-"));
    println!("versions:");
    for v in &set.versions {
        println!("  {}", v);
    }
    Ok(())
}

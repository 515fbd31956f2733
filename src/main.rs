//! libforge CLI
//!
//! Usage: libforge [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build      Build one artifact from a JSON build request
//!   build-all  Build every library in the default manifest
//!   versions   List published versions and distribution tags of a package

mod commands;

use anyhow::Result;
use clap::Parser;

use libforge::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(&cli)?;

    match &cli.command {
        Commands::Build(source) => commands::build::cmd_build(source, &config, cli.json),
        Commands::BuildAll { out, keep_going } => {
            commands::build::cmd_build_all(out, *keep_going, &config, cli.json)
        }
        Commands::Versions { package } => {
            commands::versions::cmd_versions(package, &config, cli.json)
        }
    }
}

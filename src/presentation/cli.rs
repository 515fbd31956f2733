//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--config`, `--keep-temp`) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// libforge - package front-end assets into versioned git repositories
#[derive(Parser, Debug)]
#[command(name = "libforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON summaries on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./libforge.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep fetch and checkout workspaces for debugging
    #[arg(long, global = true)]
    pub keep_temp: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one artifact from a JSON build request
    Build(RequestSource),

    /// Build every library in the default manifest
    BuildAll {
        /// Directory receiving one subdirectory per library
        #[arg(long, value_name = "DIR")]
        out: PathBuf,

        /// Attempt every library even after a failure
        #[arg(long)]
        keep_going: bool,
    },

    /// List published versions and distribution tags of a package
    Versions {
        /// Package name in the registry
        package: String,
    },
}

/// Where the build request comes from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RequestSource {
    /// Build request as inline JSON
    #[arg(long, value_name = "JSON")]
    pub request: Option<String>,

    /// File containing the JSON build request
    #[arg(long, value_name = "PATH")]
    pub request_file: Option<PathBuf>,
}

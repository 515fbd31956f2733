//! Package fetcher client (yarn)

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{Invocation, ProcessRunner};
use crate::error::ForgeResult;

/// Drives the `yarn` CLI through a process runner
#[derive(Clone)]
pub struct YarnClient {
    runner: Arc<dyn ProcessRunner>,
    program: String,
}

impl YarnClient {
    pub fn new(runner: Arc<dyn ProcessRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// `yarn info --json <package>`; returns the combined line-delimited output
    pub fn info_json(&self, cwd: &Path, package: &str) -> ForgeResult<Vec<u8>> {
        let inv = Invocation::new(&self.program, cwd).args(["info", "--json", package]);
        Ok(self.runner.run(&inv)?.combined())
    }

    /// `yarn add -E <name@version>`: pin exactly that version into `cwd`
    pub fn add_exact(&self, cwd: &Path, package_spec: &str) -> ForgeResult<()> {
        let inv = Invocation::new(&self.program, cwd).args(["add", "-E", package_spec]);
        let out = self.runner.run(&inv)?;
        debug!("result of {}:\n{}", inv, out.combined_lossy());
        Ok(())
    }
}

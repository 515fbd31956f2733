//! System process runner
//!
//! Spawns real processes with `std::process::Command`, each in the working
//! directory carried by its `Invocation`.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::domain::ports::{Invocation, ProcessRunner, ToolOutput};
use crate::error::{ForgeError, ForgeResult};

/// Runs invocations as child processes and waits for them to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> ForgeResult<ToolOutput> {
        debug!(dir = %invocation.cwd().display(), "running {}", invocation);

        let output = Command::new(invocation.program())
            .args(invocation.arguments())
            .current_dir(invocation.cwd())
            .stdin(Stdio::null())
            .output()?;

        let captured = ToolOutput::new(output.stdout, output.stderr);
        trace!("output of {}:\n{}", invocation, captured.combined_lossy());

        if !output.status.success() {
            return Err(ForgeError::ToolFailure {
                command: invocation.to_string(),
                status: output.status.to_string(),
                output: captured.combined_lossy(),
            });
        }

        Ok(captured)
    }
}

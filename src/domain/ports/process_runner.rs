//! ProcessRunner port - abstraction over external tool execution
//!
//! The package fetcher and the version-control client are driven through
//! this trait so the resolver and publisher can run against scripted fakes.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ForgeResult;

/// One external tool invocation
///
/// The working directory is part of the invocation; runners never read or
/// change the process-wide current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
    cwd: PathBuf,
}

impl Invocation {
    /// Create an invocation of `program` running in `cwd`
    pub fn new(program: impl AsRef<OsStr>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Add a single argument
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Add multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Arguments as (lossy) UTF-8, for matching and logging
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {:?}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Captured output of a finished tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    pub fn new(stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Stdout followed by stderr.
    ///
    /// A newline separates the two when stdout does not end in one, so the
    /// last stdout line never runs into the first stderr line.
    pub fn combined(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.stdout.len() + self.stderr.len() + 1);
        out.extend_from_slice(&self.stdout);
        if !self.stdout.is_empty() && !self.stdout.ends_with(b"\n") && !self.stderr.is_empty() {
            out.push(b'\n');
        }
        out.extend_from_slice(&self.stderr);
        out
    }

    pub fn combined_lossy(&self) -> String {
        String::from_utf8_lossy(&self.combined()).into_owned()
    }
}

/// Runs external tools to completion
///
/// Implementations:
/// - `SystemRunner` - spawns real processes
/// - test fakes that script tool behaviour
pub trait ProcessRunner: Send + Sync {
    /// Run `invocation` and wait for it to exit.
    ///
    /// A non-zero exit is reported as `ForgeError::ToolFailure` carrying the
    /// combined output. There is no timeout.
    fn run(&self, invocation: &Invocation) -> ForgeResult<ToolOutput>;
}

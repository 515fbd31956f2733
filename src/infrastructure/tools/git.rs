//! Version-control client (git)
//!
//! Covers the handful of operations a publish needs: bare-repository
//! initialization, clone, stage, porcelain status, commit and push.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{Invocation, ProcessRunner};
use crate::error::ForgeResult;

/// Optional committer identity passed as `-c user.name=… -c user.email=…`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl GitIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    fn config_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(name) = &self.name {
            args.push("-c".to_string());
            args.push(format!("user.name={}", name));
        }
        if let Some(email) = &self.email {
            args.push("-c".to_string());
            args.push(format!("user.email={}", email));
        }
        args
    }
}

/// Drives the `git` CLI through a process runner
#[derive(Clone)]
pub struct GitClient {
    runner: Arc<dyn ProcessRunner>,
    program: String,
    identity: GitIdentity,
}

impl GitClient {
    pub fn new(runner: Arc<dyn ProcessRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            identity: GitIdentity::default(),
        }
    }

    pub fn with_identity(mut self, identity: GitIdentity) -> Self {
        self.identity = identity;
        self
    }

    fn git(&self, cwd: &Path) -> Invocation {
        Invocation::new(&self.program, cwd)
    }

    fn run_logged(&self, inv: Invocation) -> ForgeResult<()> {
        let out = self.runner.run(&inv)?;
        debug!("result of {}:\n{}", inv, out.combined_lossy());
        Ok(())
    }

    /// `git init --bare <dir>`; re-initializing an existing repository is harmless
    pub fn init_bare(&self, dir: &Path) -> ForgeResult<()> {
        self.run_logged(self.git(dir).args(["init", "--bare"]).arg(dir))
    }

    /// `git clone <source> <dest>` into an existing, empty `dest`
    pub fn clone_into(&self, source: &Path, dest: &Path) -> ForgeResult<()> {
        self.run_logged(self.git(dest).arg("clone").arg(source).arg(dest))
    }

    /// `git add <files…>`
    pub fn add(&self, cwd: &Path, files: &[&str]) -> ForgeResult<()> {
        self.run_logged(self.git(cwd).arg("add").args(files))
    }

    /// `git status --porcelain`; empty when nothing changed
    pub fn status_porcelain(&self, cwd: &Path) -> ForgeResult<String> {
        let out = self.runner.run(&self.git(cwd).args(["status", "--porcelain"]))?;
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }

    /// `git commit -m <message>` with the configured identity
    pub fn commit(&self, cwd: &Path, message: &str) -> ForgeResult<()> {
        let inv = self
            .git(cwd)
            .args(self.identity.config_args())
            .args(["commit", "-m", message]);
        self.run_logged(inv)
    }

    /// `git push origin HEAD`
    pub fn push(&self, cwd: &Path) -> ForgeResult<()> {
        self.run_logged(self.git(cwd).args(["push", "origin", "HEAD"]))
    }
}

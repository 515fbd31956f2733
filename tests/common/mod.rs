//! Common test utilities for libforge integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus CLI execution helpers
//! - `git_available` / `git`: helpers for tests that drive the real git binary
//! - `write_stub_yarn`: a shell script standing in for the package fetcher

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the libforge CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: the CLI runs from `project_root` with `HOME`
/// and the config directory pointed into `home_dir`.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_libforge"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "libforge tests")
            .env("GIT_AUTHOR_EMAIL", "tests@libforge.invalid")
            .env("GIT_COMMITTER_NAME", "libforge tests")
            .env("GIT_COMMITTER_EMAIL", "tests@libforge.invalid")
            .env_remove("RUST_LOG");
        for key in [
            "LIBFORGE_YARN",
            "LIBFORGE_GIT",
            "LIBFORGE_KEEP_TEMP",
            "LIBFORGE_COMMIT_MESSAGE",
            "LIBFORGE_VERBOSITY",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().expect("failed to execute libforge"))
    }
}

/// Whether a usable `git` binary is on `PATH`
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir` and return trimmed stdout; panics on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Number of commits reachable from HEAD of the (bare) repository at `repo`
pub fn commit_count(repo: &Path) -> usize {
    git(repo, &["rev-list", "--count", "HEAD"]).parse().unwrap()
}

/// Shell script answering `yarn info --json` with a fixed inspect record
/// (latest `3.6.0`) and `yarn add -E name@version` by writing
/// `node_modules/<name>/dist/<name>.js`.
pub const STUB_YARN: &str = r#"#!/bin/sh
set -e
case "$1" in
  info)
    printf '%s\n' '{"type":"activityStart","data":{"id":0}}'
    printf '%s\n' '{"type":"inspect","data":{"name":"'"$3"'","dist-tags":{"latest":"3.6.0"},"versions":["3.5.1","3.6.0"]}}'
    ;;
  add)
    spec="$3"
    name="${spec%@*}"
    version="${spec##*@}"
    mkdir -p "node_modules/$name/dist"
    printf '/* %s v%s */\n' "$name" "$version" > "node_modules/$name/dist/$name.js"
    ;;
  *)
    echo "stub yarn: unsupported command: $*" >&2
    exit 1
    ;;
esac
"#;

/// Write `STUB_YARN` into `dir` as an executable and return its path
#[cfg(unix)]
pub fn write_stub_yarn(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("yarn");
    std::fs::write(&path, STUB_YARN).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

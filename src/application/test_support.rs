//! Scripted process runner for use-case tests
//!
//! Emulates just enough of yarn and git for the publish flow: `yarn add`
//! populates `node_modules`, `git init`/`git clone` create directories,
//! `git status` answers with a scripted porcelain listing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{Invocation, ProcessRunner, ToolOutput};
use crate::error::{ForgeError, ForgeResult};

pub const JQUERY_INFO: &str = concat!(
    r#"{"type":"info","data":"fetching"}"#,
    "\n",
    r#"{"type":"inspect","data":{"name":"jquery","dist-tags":{"latest":"3.6.0","beta":"4.0.0-beta"},"versions":["1.0.0","3.5.1","3.6.0"]}}"#,
    "\n",
);

/// A recorded call: program, arguments, working directory
#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: std::path::PathBuf,
    /// Whether `package.json` existed in `cwd` when the call ran
    pub had_manifest: bool,
}

impl Call {
    /// First argument after any leading `-c key=value` pairs
    pub fn subcommand(&self) -> &str {
        let mut args = self.args.iter();
        while let Some(arg) = args.next() {
            if arg == "-c" {
                args.next();
                continue;
            }
            return arg;
        }
        ""
    }

    pub fn is(&self, program: &str, subcommand: &str) -> bool {
        self.program == program && self.subcommand() == subcommand
    }
}

pub struct ScriptedRunner {
    calls: Mutex<Vec<Call>>,
    /// `name@version` -> files (relative to the package root) with contents
    packages: HashMap<String, Vec<(String, Vec<u8>)>>,
    info_output: String,
    status: Mutex<String>,
    fail_on: Option<(String, String)>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            packages: HashMap::new(),
            info_output: JQUERY_INFO.to_string(),
            status: Mutex::new("A  jquery.js\nA  lib.rs\n".to_string()),
            fail_on: None,
        }
    }

    pub fn with_package(mut self, spec: &str, file: &str, contents: &[u8]) -> Self {
        self.packages
            .entry(spec.to_string())
            .or_default()
            .push((file.to_string(), contents.to_vec()));
        self
    }

    pub fn with_info_output(mut self, output: &str) -> Self {
        self.info_output = output.to_string();
        self
    }

    pub fn with_status(self, status: &str) -> Self {
        *self.status.lock().unwrap() = status.to_string();
        self
    }

    /// Make `program subcommand` exit non-zero
    pub fn failing_on(mut self, program: &str, subcommand: &str) -> Self {
        self.fail_on = Some((program.to_string(), subcommand.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, program: &str, subcommand: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.is(program, subcommand))
            .count()
    }

    /// `program subcommand` pairs in call order
    pub fn sequence(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| format!("{} {}", c.program, c.subcommand()))
            .collect()
    }

    fn populate(&self, cwd: &Path, spec: &str) -> ForgeResult<()> {
        let name = spec
            .rsplit_once('@')
            .map(|(name, _)| name)
            .unwrap_or(spec);
        let root = cwd.join("node_modules").join(name);
        for (file, contents) in self.packages.get(spec).into_iter().flatten() {
            let path = root.join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, inv: &Invocation) -> ForgeResult<ToolOutput> {
        let call = Call {
            program: inv.program().to_string_lossy().into_owned(),
            args: inv.arg_strings(),
            cwd: inv.cwd().to_path_buf(),
            had_manifest: inv.cwd().join("package.json").is_file(),
        };
        self.calls.lock().unwrap().push(call.clone());

        if let Some((program, sub)) = &self.fail_on {
            if call.is(program, sub) {
                return Err(ForgeError::ToolFailure {
                    command: inv.to_string(),
                    status: "exit status: 1".to_string(),
                    output: "scripted failure".to_string(),
                });
            }
        }

        let stdout = match (call.program.as_str(), call.subcommand()) {
            ("yarn", "info") => self.info_output.clone(),
            ("yarn", "add") => {
                let spec = call.args.last().cloned().unwrap_or_default();
                self.populate(&call.cwd, &spec)?;
                String::new()
            }
            ("git", "init") | ("git", "clone") => {
                if let Some(dir) = call.args.last() {
                    fs::create_dir_all(dir)?;
                }
                String::new()
            }
            ("git", "status") => self.status.lock().unwrap().clone(),
            _ => String::new(),
        };
        Ok(ToolOutput::new(stdout, Vec::<u8>::new()))
    }
}

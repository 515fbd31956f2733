//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ForgeError, ForgeResult};

use super::types::{Config, Verbosity};

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "libforge.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ForgeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ForgeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ForgeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layer of the hierarchy, then apply env overrides.
///
/// An explicit path must load; the implicit project and user files are
/// only read when present.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> ForgeResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((config.with_env_overrides(), warnings));
    }

    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.is_file() {
            debug!(path = %project_config.display(), "using project config");
            let (config, warnings) = load_with_warnings(&project_config)?;
            return Ok((config.with_env_overrides(), warnings));
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            debug!(path = %user_config.display(), "using user config");
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((config.with_env_overrides(), warnings));
        }
    }

    Ok((Config::default().with_env_overrides(), Vec::new()))
}

/// `<config dir>/libforge/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("libforge").join("config.toml"))
}

/// Apply `LIBFORGE_*` overrides read through `lookup`
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(yarn) = lookup("LIBFORGE_YARN").filter(|v| !v.is_empty()) {
        config.tools.yarn = yarn;
    }

    if let Some(git) = lookup("LIBFORGE_GIT").filter(|v| !v.is_empty()) {
        config.tools.git = git;
    }

    if let Some(val) = lookup("LIBFORGE_KEEP_TEMP") {
        config.publish.keep_temp = is_truthy(&val);
    }

    if let Some(message) = lookup("LIBFORGE_COMMIT_MESSAGE").filter(|v| !v.trim().is_empty()) {
        config.publish.commit_message = message;
    }

    // Logging is not installed yet while configuration loads, so an invalid
    // value is reported on stderr directly and the current level is kept.
    if let Some(raw) = lookup("LIBFORGE_VERBOSITY") {
        match Verbosity::parse(&raw) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => {
                let _ = writeln!(
                    std::io::stderr(),
                    "Warning: Invalid LIBFORGE_VERBOSITY value '{}'\nValid values: quiet, normal, verbose, debug",
                    raw
                );
            }
        }
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    !(val.is_empty() || val == "0" || val == "false" || val == "no")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tools",
        "yarn",
        "git",
        "publish",
        "commit_message",
        "keep_temp",
        "author_name",
        "author_email",
        "codegen",
        "registry_crate",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod levenshtein_tests {
    use super::*;

    #[test]
    fn test_levenshtein_distances() {
        assert_eq!(levenshtein("git", "git"), 0);
        assert_eq!(levenshtein("gti", "git"), 2);
        assert_eq!(levenshtein("", "yarn"), 4);
    }

    #[test]
    fn test_suggest_key_rejects_distant_names() {
        assert_eq!(suggest_key("completely_unrelated"), None);
    }
}

//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::sync::Arc;

use crate::application::{BuildUseCase, VersionResolver};
use crate::config::Config;
use crate::infrastructure::{SystemRunner, WorkspaceManager, YarnClient};

/// Build use case running real `yarn` and `git` processes
pub fn create_build_use_case(config: &Config) -> BuildUseCase {
    BuildUseCase::from_config(Arc::new(SystemRunner::new()), config)
}

/// Standalone resolver for `versions`
pub fn create_version_resolver(config: &Config) -> VersionResolver {
    let yarn = YarnClient::new(Arc::new(SystemRunner::new()), config.tools.yarn.as_str());
    VersionResolver::new(yarn, WorkspaceManager::new(config.publish.keep_temp))
}

//! Pipeline Driver
//!
//! A `latest` request is resolved first and then published once, at the
//! registry's `latest` tag. A concrete version is published directly.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::application::generate::MetadataGenerator;
use crate::application::publish::{ArtifactPublisher, PublishOptions, PublishResult};
use crate::application::resolve::VersionResolver;
use crate::config::Config;
use crate::domain::entities::{BuildRequest, ResolvedVersionSet};
use crate::domain::ports::ProcessRunner;
use crate::domain::services::UnitRenderer;
use crate::domain::value_objects::VersionSpec;
use crate::error::{ForgeError, ForgeResult};
use crate::infrastructure::{GitClient, GitIdentity, WorkspaceManager, YarnClient};

/// What one build did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub artifact_name: String,
    /// Version as requested (`latest` or concrete)
    pub requested: String,
    /// Registry answer, present only for `latest` requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedVersionSet>,
    pub publish: PublishResult,
}

/// Outcome of a batch of builds
#[derive(Debug, Default)]
pub struct BatchReport {
    pub built: Vec<BuildReport>,
    /// Artifact name and error for every failed build
    pub failed: Vec<(String, ForgeError)>,
    /// Requests never attempted because an earlier one failed
    pub skipped: Vec<String>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct BuildUseCase {
    resolver: VersionResolver,
    publisher: ArtifactPublisher,
}

impl BuildUseCase {
    pub fn new(resolver: VersionResolver, publisher: ArtifactPublisher) -> Self {
        Self {
            resolver,
            publisher,
        }
    }

    /// Wire the resolver and publisher from configuration
    pub fn from_config(runner: Arc<dyn ProcessRunner>, config: &Config) -> Self {
        let workspaces = WorkspaceManager::new(config.publish.keep_temp);
        let yarn = YarnClient::new(runner.clone(), config.tools.yarn.as_str());
        let git = GitClient::new(runner, config.tools.git.as_str()).with_identity(GitIdentity {
            name: config.publish.author_name.clone(),
            email: config.publish.author_email.clone(),
        });
        let generator =
            MetadataGenerator::new(UnitRenderer::new(config.codegen.registry_crate.as_str()));
        let options =
            PublishOptions::new().with_commit_message(config.publish.commit_message.as_str());

        Self::new(
            VersionResolver::new(yarn.clone(), workspaces.clone()),
            ArtifactPublisher::new(yarn, git, workspaces)
                .with_generator(generator)
                .with_options(options),
        )
    }

    pub fn build(&self, request: &BuildRequest) -> ForgeResult<BuildReport> {
        request.validate()?;

        let (resolved, version) = match request.version_spec()? {
            VersionSpec::Latest => {
                let set = self.resolver.resolve(&request.package_name)?;
                let latest = set.latest().map(str::to_string).ok_or_else(|| {
                    ForgeError::NotFound(format!(
                        "registry reports no latest tag for '{}'",
                        request.package_name
                    ))
                })?;
                info!(package = %request.package_name, version = %latest, "building latest");
                (Some(set), latest)
            }
            VersionSpec::Exact(version) => (None, version),
        };

        let publish = self.publisher.publish(&version, request)?;
        Ok(BuildReport {
            artifact_name: request.artifact_name.clone(),
            requested: request.version.clone(),
            resolved,
            publish,
        })
    }

    /// Build each request in order; without `keep_going` the first failure
    /// ends the batch
    pub fn build_all(&self, requests: &[BuildRequest], keep_going: bool) -> BatchReport {
        let mut report = BatchReport::default();
        for (i, request) in requests.iter().enumerate() {
            match self.build(request) {
                Ok(built) => report.built.push(built),
                Err(e) => {
                    error!(artifact = %request.artifact_name, error = %e, "build failed");
                    report.failed.push((request.artifact_name.clone(), e));
                    if !keep_going {
                        report.skipped = requests[i + 1..]
                            .iter()
                            .map(|r| r.artifact_name.clone())
                            .collect();
                        break;
                    }
                }
            }
        }
        report
    }
}

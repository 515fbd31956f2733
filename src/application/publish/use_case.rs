//! Artifact Publisher
//!
//! For one concrete version:
//! 1. Ensure `output_base_dir/version` exists and is a bare repository
//! 2. Fetch `name@version` into a manifest-seeded workspace
//! 3. Clone the target repository into a second workspace
//! 4. Copy the requested file into the checkout
//! 5. Generate `lib.rs` from the copied bytes
//! 6. Stage both files; commit and push only if status is non-empty
//!
//! Any failing step aborts the publish and is returned as is. Both
//! workspaces are dropped (and removed) on every exit path.

use std::fs;
use std::path::{Component, Path};

use tracing::{debug, info};

use crate::application::generate::MetadataGenerator;
use crate::domain::entities::BuildRequest;
use crate::error::{ForgeError, ForgeResult};
use crate::infrastructure::{copy_file, GitClient, WorkspaceManager, YarnClient};

use super::options::PublishOptions;
use super::result::{PublishResult, PublishStatus};

/// Publishes a single version of a build request
pub struct ArtifactPublisher {
    yarn: YarnClient,
    git: GitClient,
    workspaces: WorkspaceManager,
    generator: MetadataGenerator,
    options: PublishOptions,
}

impl ArtifactPublisher {
    pub fn new(yarn: YarnClient, git: GitClient, workspaces: WorkspaceManager) -> Self {
        Self {
            yarn,
            git,
            workspaces,
            generator: MetadataGenerator::default(),
            options: PublishOptions::default(),
        }
    }

    pub fn with_generator(mut self, generator: MetadataGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_options(mut self, options: PublishOptions) -> Self {
        self.options = options;
        self
    }

    pub fn publish(&self, version: &str, request: &BuildRequest) -> ForgeResult<PublishResult> {
        request.validate_location()?;
        check_version_dir(version)?;

        let target_dir = request.target_dir(version);
        info!(
            package = %request.package_name,
            version,
            target_dir = %target_dir.display(),
            "publishing"
        );
        fs::create_dir_all(&target_dir)?;
        self.git.init_bare(&target_dir)?;

        let fetch = self.workspaces.acquire("libforge-fetch-")?;
        fetch.seed_manifest()?;
        self.yarn
            .add_exact(fetch.path(), &request.package_spec(version))?;

        let checkout = self.workspaces.acquire("libforge-checkout-")?;
        self.git.clone_into(&target_dir, checkout.path())?;

        let file_name = request.file_name();
        let from = request.fetched_file(fetch.path());
        let to = checkout.join(file_name);
        info!("copying {} to {}", from.display(), to.display());
        copy_file(&from, &to)?;

        let data = fs::read(&to)?;
        let unit_file = self.options.unit_file_name.as_str();
        self.generator
            .generate(&checkout.join(unit_file), &data, version, request)?;

        self.git.add(checkout.path(), &[file_name, unit_file])?;
        let status = self.git.status_porcelain(checkout.path())?;
        debug!("status:\n{}", status);

        let status = if status.trim().is_empty() {
            info!(version, "no changes, skipping commit");
            PublishStatus::Unchanged
        } else {
            self.git
                .commit(checkout.path(), &self.options.commit_message)?;
            self.git.push(checkout.path())?;
            info!(version, "committed and pushed");
            PublishStatus::Committed
        };

        Ok(PublishResult {
            version: version.to_string(),
            target_dir,
            status,
        })
    }
}

/// A version names exactly one directory below `output_base_dir`
fn check_version_dir(version: &str) -> ForgeResult<()> {
    let mut components = Path::new(version).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ if version.is_empty() => Err(ForgeError::validation("version", "must not be empty")),
        _ => Err(ForgeError::validation(
            "version",
            format!("'{}' is not a single path component", version),
        )),
    }
}

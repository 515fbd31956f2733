//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `VersionResolver` - Registry versions and distribution tags
//! - `ArtifactPublisher` - Publish one version into its git-tracked location
//! - `BuildUseCase` - The `latest` rule plus batch builds
//!
//! ## Services
//!
//! - `MetadataGenerator` - Write the generated `lib.rs`
//! - `default_manifest` - The stock library set

pub mod build;
pub mod generate;
pub mod manifest;
pub mod publish;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_support;

pub use build::{BatchReport, BuildReport, BuildUseCase};
pub use generate::MetadataGenerator;
pub use manifest::default_manifest;
pub use publish::{ArtifactPublisher, PublishOptions, PublishResult, PublishStatus};
pub use resolve::{scan_inspect_records, VersionResolver};

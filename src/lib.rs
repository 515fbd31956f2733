//! libforge - front-end asset packager
//!
//! Fetches a single JavaScript or CSS file out of a registry package with
//! `yarn`, publishes it into a per-version git repository and generates a
//! `lib.rs` embedding the bytes plus a metadata record for a runtime
//! asset registry.
//!
//! ## Layers
//!
//! - `domain` - Build requests, version sets, metadata records, unit rendering
//! - `application` - Version resolution, publishing, the build driver
//! - `infrastructure` - Workspaces, file transfer, process runner, tool clients
//! - `presentation` - CLI definitions and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    default_manifest, ArtifactPublisher, BuildReport, BuildUseCase, PublishResult, PublishStatus,
    VersionResolver,
};
pub use config::{Config, Verbosity};
pub use domain::entities::{BuildRequest, MetadataRecord, ResolvedVersionSet};
pub use domain::value_objects::{AssetType, VersionSpec};
pub use error::{ForgeError, ForgeResult};

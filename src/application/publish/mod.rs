//! Publish Module
//!
//! Publishes one resolved version of a package into its versioned,
//! git-tracked artifact location.
//!
//! ## Structure
//!
//! - `options` - Publish settings (`PublishOptions`)
//! - `result` - Outcome types (`PublishResult`, `PublishStatus`)
//! - `use_case` - The publish flow (`ArtifactPublisher`)
//!
//! ## Usage
//!
//! ```ignore
//! use libforge::application::publish::{ArtifactPublisher, PublishOptions};
//!
//! let publisher = ArtifactPublisher::new(yarn, git, workspaces);
//! let result = publisher.publish("3.6.0", &request)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PublishOptions;
pub use result::{PublishResult, PublishStatus};
pub use use_case::ArtifactPublisher;

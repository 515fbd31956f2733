//! Domain Entities
//!
//! - `BuildRequest` - Input to one build/publish operation
//! - `ResolvedVersionSet` - Registry answer for a package's versions and tags
//! - `MetadataRecord` - Descriptor embedded in the generated registry unit

mod build_request;
mod metadata_record;
mod version_set;

pub use build_request::BuildRequest;
pub use metadata_record::MetadataRecord;
pub use version_set::ResolvedVersionSet;

//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_type;
mod hash;
mod version;

pub use asset_type::AssetType;
pub use hash::ContentHash;
pub use version::{module_ident, sanitize_ident, VersionSpec, LATEST};

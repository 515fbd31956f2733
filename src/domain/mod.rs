//! Domain Layer
//!
//! Pure packaging logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Build requests, resolved version sets, metadata records
//! - `value_objects/` - Immutable value types (AssetType, VersionSpec, ContentHash)
//! - `services/` - Rendering of the generated registry unit
//! - `ports/` - Interface definitions for infrastructure (process execution)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All tool execution goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

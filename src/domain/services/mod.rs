//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod unit_renderer;

pub use unit_renderer::{escape_byte_string, UnitRenderer, DEFAULT_REGISTRY_CRATE, UNIT_FILE_NAME};

//! Metadata Record Generator
//!
//! Writes the generated `lib.rs` that embeds an artifact's bytes next to
//! its registry descriptor.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::entities::{BuildRequest, MetadataRecord};
use crate::domain::services::UnitRenderer;
use crate::error::ForgeResult;

#[derive(Debug, Clone, Default)]
pub struct MetadataGenerator {
    renderer: UnitRenderer,
}

impl MetadataGenerator {
    pub fn new(renderer: UnitRenderer) -> Self {
        Self { renderer }
    }

    /// Render the unit for `request` at `version` and write it to `output_path`.
    ///
    /// The bytes may be arbitrary binary data. Fails on a request without an
    /// asset type or when the write fails.
    pub fn generate(
        &self,
        output_path: &Path,
        data: &[u8],
        version: &str,
        request: &BuildRequest,
    ) -> ForgeResult<()> {
        let record = MetadataRecord::for_request(request, version)?;
        let unit = self.renderer.render(&record, data, &request.imports);
        debug!(
            path = %output_path.display(),
            module = %record.module_ident(),
            bytes = data.len(),
            "writing generated unit"
        );
        fs::write(output_path, unit)?;
        Ok(())
    }
}

//! Generated unit rendering
//!
//! Produces the `lib.rs` source that embeds an artifact's bytes next to its
//! metadata record, so a registry crate can register it at load time.

use std::fmt::Write as _;

use crate::domain::entities::MetadataRecord;
use crate::domain::value_objects::ContentHash;

/// File name of the generated unit inside a versioned artifact location
pub const UNIT_FILE_NAME: &str = "lib.rs";

/// Crate path the generated unit registers against by default
pub const DEFAULT_REGISTRY_CRATE: &str = "uiregistry";

/// Renders generated registry units
#[derive(Debug, Clone)]
pub struct UnitRenderer {
    registry_crate: String,
}

impl Default for UnitRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_CRATE)
    }
}

impl UnitRenderer {
    pub fn new(registry_crate: impl Into<String>) -> Self {
        Self {
            registry_crate: registry_crate.into(),
        }
    }

    /// Render the unit for `record` embedding `data`.
    ///
    /// Output is a pure function of its inputs so that republishing unchanged
    /// content leaves the tracked tree clean.
    pub fn render(&self, record: &MetadataRecord, data: &[u8], imports: &[String]) -> String {
        let registry = &self.registry_crate;
        let module = record.module_ident();
        let mut out = String::with_capacity(data.len() * 2 + 1024);

        // Writing into a String cannot fail.
        let _ = writeln!(out, "// Code generated by libforge. DO NOT EDIT.");
        let _ = writeln!(out, "// Module: {}", module);
        let _ = writeln!(out, "// Content: {}", ContentHash::from_bytes(data));
        out.push('\n');

        let _ = writeln!(out, "use {}::{{BytesDataSource, Entry}};", registry);
        for import in imports {
            let path = normalize_import(import);
            if !path.is_empty() {
                let _ = writeln!(out, "use {};", path);
            }
        }
        out.push('\n');

        let _ = writeln!(out, "/// Identifier of this generated unit.");
        let _ = writeln!(out, "pub const MODULE: &str = {:?};", module);
        out.push('\n');

        let _ = writeln!(out, "/// Raw bytes of `{}`.", record.file_name);
        let _ = writeln!(out, "pub static DATA: &[u8] = b\"{}\";", escape_byte_string(data));
        out.push('\n');

        let _ = writeln!(out, "/// Registry entry describing this artifact.");
        let _ = writeln!(out, "pub fn entry() -> Entry {{");
        let _ = writeln!(out, "    Entry {{");
        let _ = writeln!(out, "        asset_type: {:?},", record.asset_type.as_str());
        let _ = writeln!(out, "        name: {:?},", record.name);
        let _ = writeln!(out, "        version: {:?},", record.version);
        let _ = writeln!(out, "        file_name: {:?},", record.file_name);
        let _ = writeln!(out, "        deps: {},", render_str_slice(&record.deps));
        let _ = writeln!(out, "        data_source: BytesDataSource::new(DATA),");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "}}");
        out.push('\n');

        let _ = writeln!(out, "/// Registers this artifact with the global registry.");
        let _ = writeln!(
            out,
            "pub fn register() -> Result<(), {}::Error> {{",
            registry
        );
        let _ = writeln!(out, "    {}::global().register(entry())", registry);
        let _ = writeln!(out, "}}");

        out
    }
}

/// Escape arbitrary bytes for the body of a Rust byte-string literal
pub fn escape_byte_string(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for &b in data {
        out.extend(std::ascii::escape_default(b).map(char::from));
    }
    out
}

fn render_str_slice(items: &[String]) -> String {
    if items.is_empty() {
        return "&[]".to_string();
    }
    let quoted: Vec<String> = items.iter().map(|s| format!("{:?}", s)).collect();
    format!("&[{}]", quoted.join(", "))
}

fn normalize_import(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("use ").unwrap_or(trimmed);
    trimmed.trim_end_matches(';').trim()
}

//! Error types for libforge
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for libforge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Main error type for libforge operations
#[derive(Error, Debug)]
pub enum ForgeError {
    /// A required build request field is missing or malformed
    #[error("invalid build request: '{field}' {reason}")]
    Validation { field: &'static str, reason: String },

    /// The registry query produced no usable record
    #[error("not found: {0}")]
    NotFound(String),

    /// An external tool exited unsuccessfully
    #[error("`{command}` failed ({status})\n{output}")]
    ToolFailure {
        command: String,
        status: String,
        output: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured tool output could not be parsed
    #[error("failed to decode tool output: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl ForgeError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

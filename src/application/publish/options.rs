//! Publish Options

use crate::domain::services::UNIT_FILE_NAME;

/// Default commit message for artifact updates
pub const DEFAULT_COMMIT_MESSAGE: &str = "latest and greatest";

/// Options for the publish use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// Message used for every artifact commit
    pub commit_message: String,
    /// Name of the generated unit next to the asset
    pub unit_file_name: String,
}

impl PublishOptions {
    pub fn new() -> Self {
        Self {
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            unit_file_name: UNIT_FILE_NAME.to_string(),
        }
    }

    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self::new()
    }
}

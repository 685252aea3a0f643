use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name prefix of resource-fork entries that archivers leave behind.
pub const HIDDEN_FILE_MARKER: &str = "._";

/// A file found in the submission bundle.
///
/// `directory` is relative to the bundle root, `/`-separated, and empty for
/// files at the root.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub name: String,
    pub directory: String,
}

impl DiscoveredFile {
    pub fn new(directory: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with(HIDDEN_FILE_MARKER)
    }

    /// Bundle-relative path of the file.
    #[must_use]
    pub fn relative_path(&self) -> String {
        if self.directory.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.directory, self.name)
        }
    }
}

//! Bundle extraction settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Directory archives are extracted into. Empty means a temporary
    /// directory removed after the run.
    #[serde(default)]
    pub extract_dir: String,
}

impl IngestConfig {
    #[must_use]
    pub fn extract_dir(&self) -> Option<PathBuf> {
        if self.extract_dir.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.extract_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extract_dir_means_temporary() {
        assert!(IngestConfig::default().extract_dir().is_none());
        let config = IngestConfig {
            extract_dir: "uploads".to_string(),
        };
        assert_eq!(config.extract_dir(), Some(PathBuf::from("uploads")));
    }
}

//! Input size limits.

use serde::{Deserialize, Serialize};

/// Default upload ceiling, 5 GB.
const fn default_max_upload_mb() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Largest roster or bundle file accepted, in MB.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
}

impl LimitsConfig {
    /// Limit in bytes.
    #[must_use]
    pub const fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

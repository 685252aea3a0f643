//! Audit behaviour configuration.

use rp_core::enums::MatchMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Whether file names must match their template in full or only as a prefix.
    #[serde(default)]
    pub match_mode: MatchMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_prefix_matching() {
        assert_eq!(AuditConfig::default().match_mode, MatchMode::Prefix);
    }
}

use anyhow::Context;
use rp_config::RpConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RpConfig> {
    let config = RpConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load rpcheck configuration")?;

    tracing::debug!(
        match_mode = %config.audit.match_mode,
        max_upload_mb = config.limits.max_upload_mb,
        "configuration loaded"
    );
    Ok(config)
}

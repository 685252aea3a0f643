use anyhow::Context;
use rp_audit::FilenameValidator;
use rp_config::RpConfig;

/// Shared run state built once at startup and handed to every command.
pub struct AppContext {
    pub config: RpConfig,
    pub validator: FilenameValidator,
}

impl AppContext {
    /// Compile the naming templates for the configured match mode.
    pub fn init(config: RpConfig) -> anyhow::Result<Self> {
        let validator = FilenameValidator::new(config.audit.match_mode)
            .context("failed to compile naming templates")?;
        Ok(Self { config, validator })
    }
}

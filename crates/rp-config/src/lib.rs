//! # rp-config
//!
//! Layered configuration loading for the RP checker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RPCHECK_*` prefix, `__` as separator)
//! 2. An explicit file passed with `rpc --config <path>`
//! 3. Project-level `.rpcheck/config.toml`
//! 4. User-level `~/.config/rpcheck/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RPCHECK_AUDIT__MATCH_MODE` -> `audit.match_mode`,
//! `RPCHECK_LIMITS__MAX_UPLOAD_MB` -> `limits.max_upload_mb`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rp_config::RpConfig;
//!
//! let config = RpConfig::load_with_dotenv(None).expect("config");
//! println!("match mode: {}", config.audit.match_mode);
//! ```

mod audit;
mod error;
mod ingest;
mod limits;
mod roster;

pub use audit::AuditConfig;
pub use error::ConfigError;
pub use ingest::IngestConfig;
pub use limits::LimitsConfig;
pub use roster::RosterConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "RPCHECK_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".rpcheck/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RpConfig {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl RpConfig {
    /// Load configuration from defaults, TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`RpConfig::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `extra` above the project file.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra)?.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then load configuration.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment(extra: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            if !path.is_file() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Reject values that would make every run fail or match nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_upload_mb == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limits.max_upload_mb".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let columns = [
            ("roster.student_code_column", &self.roster.student_code_column),
            ("roster.name_column", &self.roster.name_column),
            (
                "roster.supervisor_code_column",
                &self.roster.supervisor_code_column,
            ),
            ("roster.reviewer_code_column", &self.roster.reviewer_code_column),
        ];
        for (field, value) in columns {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "column name cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rpcheck").join("config.toml"))
    }
}

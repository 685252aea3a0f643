use rp_config::{ENV_PREFIX, LimitsConfig, RosterConfig, RpConfig};
use rp_core::enums::MatchMode;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &RpConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RpConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        (
            "AUDIT",
            config.audit.match_mode == MatchMode::default(),
            "MATCH_MODE",
        ),
        (
            "LIMITS",
            config.limits.max_upload_mb == LimitsConfig::default().max_upload_mb,
            "MAX_UPLOAD_MB",
        ),
        (
            "ROSTER",
            config.roster.required_columns() == RosterConfig::default().required_columns(),
            "STUDENT_CODE_COLUMN",
        ),
        (
            "INGEST",
            config.ingest.extract_dir().is_none(),
            "EXTRACT_DIR",
        ),
    ];

    let mut warnings = Vec::new();
    for (section, at_default, example_key) in sections {
        let prefix = format!("{ENV_PREFIX}{section}");
        if at_default && has_single_underscore_key(&env_keys, &prefix) {
            warnings.push(format!(
                "{} config appears default while {prefix}* env vars exist. Use double underscores (example: {prefix}__{example_key}).",
                section.to_ascii_lowercase()
            ));
        }
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}

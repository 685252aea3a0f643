//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use rp_config::{ConfigError, RpConfig};
use rp_core::enums::MatchMode;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
match_mode = "full"

[limits]
max_upload_mb = 250

[roster]
student_code_column = "code"
name_column = "name"
supervisor_code_column = "supervisor"
reviewer_code_column = "reviewer"

[ingest]
extract_dir = "uploads"
"#,
        )?;

        let config: RpConfig = Figment::from(Serialized::defaults(RpConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.audit.match_mode, MatchMode::Full);
        assert_eq!(config.limits.max_upload_mb, 250);
        assert_eq!(
            config.roster.required_columns(),
            ["code", "name", "supervisor", "reviewer"]
        );
        assert_eq!(
            config.ingest.extract_dir(),
            Some(std::path::PathBuf::from("uploads"))
        );
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[roster]
name_column = "Nama"
"#,
        )?;

        let config: RpConfig = Figment::from(Serialized::defaults(RpConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.roster.name_column, "Nama");
        assert_eq!(config.roster.student_code_column, "KodeMahasiswa");
        assert_eq!(config.audit.match_mode, MatchMode::Prefix);
        assert_eq!(config.limits.max_upload_mb, 5000);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rpcheck")?;
        jail.create_file(
            ".rpcheck/config.toml",
            r#"
[audit]
match_mode = "full"
"#,
        )?;

        let config = RpConfig::load().expect("config loads");
        assert_eq!(config.audit.match_mode, MatchMode::Full);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rpcheck")?;
        jail.create_file(
            ".rpcheck/config.toml",
            r#"
[limits]
max_upload_mb = 100
"#,
        )?;
        jail.create_file(
            "strict.toml",
            r#"
[limits]
max_upload_mb = 10
"#,
        )?;

        let config =
            RpConfig::load_from(Some(std::path::Path::new("strict.toml"))).expect("config loads");
        assert_eq!(config.limits.max_upload_mb, 10);
        Ok(())
    });
}

#[test]
fn invalid_match_mode_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rpcheck")?;
        jail.create_file(
            ".rpcheck/config.toml",
            r#"
[audit]
match_mode = "fuzzy"
"#,
        )?;

        let err = RpConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed cwd and env var manipulation.

use atk_config::{AtkConfig, LOCAL_CONFIG_FILE};
use atk_core::enums::UnresolvedTypePolicy;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_every_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[author]
name = "Ada Lovelace"
email = "ada@example.edu"
license = "CC-BY-4.0"
language = "es"

[lms]
endpoint = "https://lms.example.edu"
api_key = "toml-key"
timeout_secs = 10

[sync]
concurrency = 4
skip_duplicates = false
unresolved_types = "reject"

[defaults]
points = 5
auto_grade = false
published = false
quarter = "Q3"
"#,
        )?;

        let config: AtkConfig = Figment::from(Serialized::defaults(AtkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.author.name, "Ada Lovelace");
        assert_eq!(config.author.email(), Some("ada@example.edu".to_string()));
        assert_eq!(config.author.license, "CC-BY-4.0");
        assert_eq!(config.author.language, "es");
        assert!(config.lms.is_configured());
        assert_eq!(config.lms.timeout_secs, 10);
        assert_eq!(config.sync.concurrency, 4);
        assert!(!config.sync.skip_duplicates);
        assert_eq!(config.sync.unresolved_types, UnresolvedTypePolicy::Reject);
        assert_eq!(config.defaults.points, 5);
        assert!(!config.defaults.auto_grade);
        assert!(!config.defaults.published);
        assert_eq!(config.defaults.quarter, "Q3");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[lms]
endpoint = "https://lms.example.edu"
"#,
        )?;

        let config = AtkConfig::load().expect("config loads");
        assert_eq!(config.lms.endpoint, "https://lms.example.edu");
        assert_eq!(config.lms.timeout_secs, 30);
        assert!(!config.lms.is_configured());
        assert_eq!(config.author.name, "Unknown Author");
        Ok(())
    });
}

#[test]
fn invalid_policy_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[sync]
unresolved_types = "ignore"
"#,
        )?;

        assert!(AtkConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn written_config_is_picked_up_locally() {
    Jail::expect_with(|jail| {
        let config_home = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", config_home);
        let mut config = AtkConfig::default();
        config.author.name = "Grace".into();
        config
            .write_to(&jail.directory().join(LOCAL_CONFIG_FILE))
            .expect("config written");

        let loaded = AtkConfig::load().expect("config loads");
        assert_eq!(loaded, config);
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn local_file_overrides_global_file() {
    Jail::expect_with(|jail| {
        let config_home = jail.directory().join("xdg").display().to_string();
        jail.set_env("XDG_CONFIG_HOME", config_home);
        jail.create_dir("xdg/assignment-toolkit")?;
        jail.create_file(
            "xdg/assignment-toolkit/config.toml",
            r#"
[author]
name = "Global Author"
email = "global@example.edu"
"#,
        )?;
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[author]
name = "Local Author"
"#,
        )?;

        let config = AtkConfig::load().expect("config loads");
        assert_eq!(config.author.name, "Local Author");
        assert_eq!(config.author.email, "global@example.edu");
        Ok(())
    });
}

#[test]
fn written_file_loads_back_through_figment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(LOCAL_CONFIG_FILE);

    let mut config = AtkConfig::default();
    config.author.name = "Grace Hopper".into();
    config.sync.concurrency = 3;
    config.write_to(&path).expect("config writes");

    let reloaded: AtkConfig = Figment::from(Serialized::defaults(AtkConfig::default()))
        .merge(Toml::file(&path))
        .extract()
        .expect("config reloads");
    assert_eq!(reloaded, config);
}

#[test]
fn write_to_missing_directory_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent").join(LOCAL_CONFIG_FILE);

    let err = AtkConfig::default().write_to(&path).unwrap_err();
    assert!(err.to_string().contains("absent"), "{err}");
}

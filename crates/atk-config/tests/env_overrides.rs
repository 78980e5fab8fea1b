use atk_config::{AtkConfig, LOCAL_CONFIG_FILE};
use atk_core::enums::UnresolvedTypePolicy;
use figment::Jail;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("ATK_LMS__ENDPOINT", "https://lms.example.edu");
        jail.set_env("ATK_LMS__API_KEY", "env-key");
        jail.set_env("ATK_SYNC__CONCURRENCY", "3");
        jail.set_env("ATK_SYNC__UNRESOLVED_TYPES", "reject");

        let config = AtkConfig::load().expect("config loads");
        assert!(config.lms.is_configured());
        assert_eq!(config.lms.api_key, "env-key");
        assert_eq!(config.sync.concurrency, 3);
        assert_eq!(config.sync.unresolved_types, UnresolvedTypePolicy::Reject);
        Ok(())
    });
}

#[test]
fn env_beats_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[lms]
endpoint = "https://from-file.example.edu"
api_key = "file-key"
"#,
        )?;
        jail.set_env("ATK_LMS__API_KEY", "env-key");

        let config = AtkConfig::load().expect("config loads");
        assert_eq!(config.lms.endpoint, "https://from-file.example.edu");
        assert_eq!(config.lms.api_key, "env-key");
        Ok(())
    });
}

#[test]
fn unrelated_atk_vars_are_ignored() {
    Jail::expect_with(|jail| {
        let config_home = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", config_home);
        jail.set_env("ATK_LOG", "debug");
        assert_eq!(AtkConfig::load().expect("config loads"), AtkConfig::default());
        Ok(())
    });
}

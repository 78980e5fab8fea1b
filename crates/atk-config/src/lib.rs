//! # atk-config
//!
//! Layered configuration loading for the assignment toolkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATK_*` prefix, `__` as separator)
//! 2. Workspace-level `./.assignment-config.toml`
//! 3. User-level `~/.config/assignment-toolkit/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATK_LMS__API_KEY` -> `lms.api_key`, `ATK_SYNC__CONCURRENCY` ->
//! `sync.concurrency`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use atk_config::AtkConfig;
//!
//! let config = AtkConfig::load_with_dotenv().expect("config");
//! if config.lms.is_configured() {
//!     println!("LMS: {}", config.lms.base_url());
//! }
//! ```

mod author;
mod defaults;
mod error;
mod lms;
mod sync;

pub use author::AuthorConfig;
pub use defaults::AssignmentDefaults;
pub use error::ConfigError;
pub use lms::LmsConfig;
pub use sync::SyncConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace config file written by `atk init`, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".assignment-config.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ATK_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AtkConfig {
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default)]
    pub lms: LmsConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub defaults: AssignmentDefaults,
}

impl AtkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after applying `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Workspace-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("assignment-toolkit").join("config.toml"))
    }

    /// The LMS section, if it is usable for network calls.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the endpoint or API key is
    /// missing, and [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn require_lms(&self) -> Result<&LmsConfig, ConfigError> {
        if !self.lms.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "lms".to_string(),
            });
        }
        if self.lms.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lms.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(&self.lms)
    }

    /// Render as TOML for writing a starter config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::from)
    }

    /// Write this config as TOML to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] or [`ConfigError::Write`].
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AtkConfig::default();
        assert!(!config.lms.is_configured());
        assert_eq!(config.author.name, "Unknown Author");
        assert_eq!(config.sync.concurrency, 1);
        assert_eq!(config.defaults.points, 1);
    }

    #[test]
    fn require_lms_reports_missing_section() {
        let err = AtkConfig::default().require_lms().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "lms"));
    }

    #[test]
    fn require_lms_rejects_zero_timeout() {
        let mut config = AtkConfig::default();
        config.lms.endpoint = "https://lms.example.edu".into();
        config.lms.api_key = "key".into();
        config.lms.timeout_secs = 0;
        assert!(matches!(
            config.require_lms(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn toml_output_reloads_identically() {
        let mut config = AtkConfig::default();
        config.author.name = "Ada".into();
        config.author.email = "ada@example.edu".into();

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[author]"));
        let reloaded: AtkConfig = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, config);
    }
}

//! Authoring identity stamped on new packages.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Unknown Author".to_string()
}

fn default_license() -> String {
    "CC-BY-SA-4.0".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthorConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// SPDX identifier recorded in package metadata.
    #[serde(default = "default_license")]
    pub license: String,

    /// Content language code (e.g., "en", "es").
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: String::new(),
            license: default_license(),
            language: default_language(),
        }
    }
}

impl AuthorConfig {
    /// Email as package metadata expects it: `None` when blank.
    pub fn email(&self) -> Option<String> {
        Some(self.email.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthorConfig::default();
        assert_eq!(config.name, "Unknown Author");
        assert_eq!(config.license, "CC-BY-SA-4.0");
        assert_eq!(config.language, "en");
        assert_eq!(config.email(), None);
    }

    #[test]
    fn blank_email_is_none() {
        let config = AuthorConfig {
            email: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.email(), None);
    }
}

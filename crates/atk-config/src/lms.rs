//! LMS connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LmsConfig {
    /// Base URL of the LMS (e.g., `https://lms.example.edu`).
    #[serde(default)]
    pub endpoint: String,

    /// Bearer token sent with every request.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LmsConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LmsConfig {
    /// Check if both the endpoint and the API key are set.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint without trailing slashes, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim().trim_end_matches('/')
    }
}

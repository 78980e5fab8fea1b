//! Synchronization behaviour.

use atk_core::enums::UnresolvedTypePolicy;
use serde::{Deserialize, Serialize};

/// Packages uploaded at once during batch sync.
const fn default_concurrency() -> usize {
    1
}

const fn default_skip_duplicates() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Ask the LMS for an existing assignment with the same content hash
    /// before creating one.
    #[serde(default = "default_skip_duplicates")]
    pub skip_duplicates: bool,

    /// What to send when an assignment type does not resolve.
    #[serde(default)]
    pub unresolved_types: UnresolvedTypePolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            skip_duplicates: default_skip_duplicates(),
            unresolved_types: UnresolvedTypePolicy::default(),
        }
    }
}

impl SyncConfig {
    /// Concurrency with zero treated as one.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sequential_and_lenient() {
        let config = SyncConfig::default();
        assert_eq!(config.concurrency, 1);
        assert!(config.skip_duplicates);
        assert_eq!(config.unresolved_types, UnresolvedTypePolicy::PassThrough);
    }

    #[test]
    fn zero_concurrency_runs_sequentially() {
        let config = SyncConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_concurrency(), 1);
    }
}

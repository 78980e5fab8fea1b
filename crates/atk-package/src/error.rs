//! Package error types.

use std::path::PathBuf;

use atk_types::TypeError;
use thiserror::Error;

/// Errors raised while reading, writing, or converting packages.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Filesystem read failure.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem write failure.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a well-formed package. No partial recovery is attempted.
    #[error("malformed package document {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML encoding failure.
    #[error("failed to encode package: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// JSON encoding failure while hashing.
    #[error("failed to encode assignment body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A bundle would replace a directory the tool did not create.
    #[error("refusing to replace {}: {reason}", path.display())]
    BundleTarget { path: PathBuf, reason: &'static str },

    /// The assignment type did not resolve and the policy is to reject.
    #[error(transparent)]
    UnresolvedType(#[from] TypeError),
}

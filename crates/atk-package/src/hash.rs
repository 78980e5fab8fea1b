//! Content fingerprinting.
//!
//! The hash covers the assignment body only, so re-saving a package (new id,
//! new timestamps) keeps its hash while any substantive edit changes it. The
//! LMS uses it for duplicate detection.

use atk_core::entities::{Assignment, AssignmentPackage};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::PackageError;

/// Lowercase hex SHA-256 over the compact JSON encoding of `assignment`.
///
/// # Errors
///
/// Returns [`PackageError::Encode`] if the body cannot be serialized.
pub fn content_hash(assignment: &Assignment) -> Result<String, PackageError> {
    let mut hasher = Sha256::new();
    serde_json::to_writer(&mut hasher, assignment)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Recompute `metadata.source_hash`. When the hash changes, `metadata.modified`
/// is set to `now`. Returns whether the hash changed.
///
/// # Errors
///
/// Same as [`content_hash`].
pub fn stamp_hash(pkg: &mut AssignmentPackage, now: DateTime<Utc>) -> Result<bool, PackageError> {
    let hash = content_hash(&pkg.assignment)?;
    if hash == pkg.metadata.source_hash {
        return Ok(false);
    }
    pkg.metadata.source_hash = hash;
    pkg.metadata.modified = now;
    Ok(true)
}

/// Integrity of a package's recorded hash against its current body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashCheck {
    Match,
    Mismatch { recorded: String, actual: String },
    /// No hash was recorded.
    Missing { actual: String },
}

/// Compare the recorded `source_hash` with a fresh hash of the body.
///
/// # Errors
///
/// Same as [`content_hash`].
pub fn verify_source_hash(pkg: &AssignmentPackage) -> Result<HashCheck, PackageError> {
    let actual = content_hash(&pkg.assignment)?;
    let recorded = pkg.metadata.source_hash.trim();
    Ok(if recorded.is_empty() {
        HashCheck::Missing { actual }
    } else if recorded.eq_ignore_ascii_case(&actual) {
        HashCheck::Match
    } else {
        HashCheck::Mismatch {
            recorded: recorded.to_string(),
            actual,
        }
    })
}

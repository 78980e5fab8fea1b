//! Enums shared by the package model and the import result records.
//!
//! All enums serialize in lowercase and expose `as_str()` for display.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Target difficulty of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidValue {
                kind: "difficulty",
                value: s.to_string(),
                expected: "beginner, intermediate, advanced",
            })
    }
}

// ---------------------------------------------------------------------------
// ImportStatus
// ---------------------------------------------------------------------------

/// Outcome of synchronizing one package with the LMS.
///
/// ```text
/// success  created, all resources uploaded
/// partial  created, at least one resource upload failed
/// failed   not created
/// exists   skipped, an assignment with the same content hash exists remotely
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Success,
    Partial,
    Failed,
    Exists,
}

impl ImportStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Failed => "failed",
            Self::Exists => "exists",
        }
    }

    /// Whether this outcome counts as a failure in batch totals.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UnresolvedTypePolicy
// ---------------------------------------------------------------------------

/// What the wire converter does with an assignment type the registry cannot
/// resolve.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedTypePolicy {
    /// Send the package's own type and subtype unchanged.
    #[default]
    PassThrough,
    /// Fail the conversion.
    Reject,
}

impl UnresolvedTypePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PassThrough => "pass-through",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for UnresolvedTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnresolvedTypePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass-through" | "passthrough" => Ok(Self::PassThrough),
            "reject" => Ok(Self::Reject),
            _ => Err(CoreError::InvalidValue {
                kind: "unresolved type policy",
                value: s.to_string(),
                expected: "pass-through, reject",
            }),
        }
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Assignment, Dependencies, Resource};
use crate::responses::ValidationResult;

/// A complete portable assignment: the unit that is validated, hashed and synced.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AssignmentPackage {
    pub metadata: PackageMetadata,
    pub assignment: Assignment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Dependencies::is_empty")]
    pub dependencies: Dependencies,
    /// Last validation outcome, only present when explicitly embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
}

impl AssignmentPackage {
    /// Wrap an assignment body with fresh metadata. The content hash is left
    /// empty; callers stamp it once the body is final.
    #[must_use]
    pub fn new(metadata: PackageMetadata, assignment: Assignment) -> Self {
        Self {
            metadata,
            assignment,
            resources: Vec::new(),
            dependencies: Dependencies::default(),
            validation: None,
        }
    }
}

/// Package-level provenance. None of these fields participate in the content hash.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PackageMetadata {
    pub id: String,
    pub version: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub source_hash: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, String>,
}

impl PackageMetadata {
    /// Metadata for a brand-new package at version `1.0.0`.
    #[must_use]
    pub fn new(id: impl Into<String>, author: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            version: "1.0.0".to_string(),
            created: now,
            modified: now,
            author: author.into(),
            email: None,
            license: None,
            tags: Vec::new(),
            description: None,
            language: None,
            source_hash: String::new(),
            custom: BTreeMap::new(),
        }
    }
}

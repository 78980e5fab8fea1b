use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A file or link attached to an assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Path of the file on disk, relative to the package document.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub file_size: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub checksum: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub order: u32,
    pub is_public: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Resource {
    /// Whether the resource refers to a local file that must be uploaded.
    #[must_use]
    pub fn has_local_file(&self) -> bool {
        !self.local_path.trim().is_empty()
    }
}

/// Prerequisites and relationships of an assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Dependencies {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommended_courses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_resources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub software_requirements: Vec<SoftwareRequirement>,
}

impl Dependencies {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
            && self.prerequisites.is_empty()
            && self.recommended_courses.is_empty()
            && self.required_resources.is_empty()
            && self.software_requirements.is_empty()
    }
}

/// A tool the learner needs installed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct SoftwareRequirement {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub required: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

//! Result records produced by validation and synchronization.
//!
//! These are ephemeral: they are printed by `atk` commands and only end up in a
//! package document when validation is explicitly embedded.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ImportStatus;

/// One data-quality finding, attributed to a dotted field path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.field)
    }
}

/// Outcome of validating one package.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Quality score, 0–100.
    pub score: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationIssue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationIssue>,
    pub validated_at: DateTime<Utc>,
    pub validator_version: String,
}

/// Outcome of synchronizing one package.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
    pub status: ImportStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ImportResult {
    #[must_use]
    pub fn success(assignment_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            resource_ids: Vec::new(),
            conflicts: Vec::new(),
            status: ImportStatus::Success,
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn exists(assignment_id: impl Into<String>) -> Self {
        Self {
            status: ImportStatus::Exists,
            ..Self::success(assignment_id, "Assignment already exists")
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            assignment_id: None,
            resource_ids: Vec::new(),
            conflicts: Vec::new(),
            status: ImportStatus::Failed,
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }
}

/// Aggregate outcome of a batch synchronization. `results` is in input order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BatchImportResult {
    pub batch_id: String,
    pub total_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<ImportResult>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl BatchImportResult {
    /// Tally per-item results. Anything that is not `failed` counts as a success.
    #[must_use]
    pub fn from_results(
        batch_id: impl Into<String>,
        results: Vec<ImportResult>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let failure_count = results.iter().filter(|r| r.status.is_failure()).count();
        Self {
            batch_id: batch_id.into(),
            total_count: results.len(),
            success_count: results.len() - failure_count,
            failure_count,
            results,
            started_at,
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn batch_tally_counts_partial_and_exists_as_success() {
        let now = Utc::now();
        let mut partial = ImportResult::success("a-2", "created");
        partial.status = ImportStatus::Partial;
        let batch = BatchImportResult::from_results(
            "batch-1",
            vec![
                ImportResult::success("a-1", "created"),
                partial,
                ImportResult::failed("API error (500): boom"),
                ImportResult::exists("a-4"),
            ],
            now,
            now,
        );
        assert_eq!(batch.total_count, 4);
        assert_eq!(batch.success_count, 3);
        assert_eq!(batch.failure_count, 1);
        assert_eq!(batch.results[2].status, ImportStatus::Failed);
    }

    #[test]
    fn failed_result_omits_empty_fields() {
        let json = serde_json::to_value(ImportResult::failed("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "message": "nope"}));
    }

    #[test]
    fn issue_display_includes_field() {
        let issue = ValidationIssue::new("assignment.title", "Assignment title is required");
        assert_eq!(issue.to_string(), "Assignment title is required (assignment.title)");
    }
}

//! Conversion of a package into the record the LMS import API accepts.

use atk_core::IMPORTED_FROM;
use atk_core::entities::{AssignmentPackage, CodeSubmissionConfig, QuestionPayload};
use atk_core::enums::UnresolvedTypePolicy;
use atk_types::{TypeError, TypeRegistry};
use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PackageError;
use crate::hash::content_hash;

/// Flat assignment record sent to `POST /api/assignments`.
///
/// `type`/`subtype` carry the LMS vocabulary. Scheduling and limit fields are
/// omitted when unset rather than sent as zero values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireAssignment {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub lms_type: String,
    #[serde(rename = "subtype")]
    pub lms_subtype: String,
    pub category: String,
    pub difficulty: String,
    pub points: i32,
    pub instructions: String,
    pub criteria: String,
    pub auto_grade: bool,
    pub show_feedback: bool,
    pub shuffle_questions: bool,
    pub allow_review: bool,
    pub published: bool,
    pub quarter: String,
    pub track_attempts: bool,
    pub track_confidence: bool,
    pub track_time_spent: bool,
    pub learning_objectives: Vec<String>,
    pub prerequisites: Vec<String>,
    pub recommended_courses: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<QuestionPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_submission_config: Option<CodeSubmissionConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    // Provenance
    pub template_id: String,
    pub version: String,
    /// Hash of the body being sent, not the recorded one.
    pub source_hash: String,
    pub imported_from: String,
    pub imported_at: DateTime<Utc>,
}

/// Translates packages into [`WireAssignment`]s using a shared registry.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    registry: &'a TypeRegistry,
    policy: UnresolvedTypePolicy,
}

impl<'a> Converter<'a> {
    #[must_use]
    pub const fn new(registry: &'a TypeRegistry, policy: UnresolvedTypePolicy) -> Self {
        Self { registry, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> UnresolvedTypePolicy {
        self.policy
    }

    /// Convert `pkg`, stamping `importedAt` with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::UnresolvedType`] only under
    /// [`UnresolvedTypePolicy::Reject`].
    pub fn to_wire(&self, pkg: &AssignmentPackage) -> Result<WireAssignment, PackageError> {
        self.to_wire_at(pkg, Utc::now())
    }

    /// Convert `pkg` as of `now`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::to_wire`].
    pub fn to_wire_at(
        &self,
        pkg: &AssignmentPackage,
        now: DateTime<Utc>,
    ) -> Result<WireAssignment, PackageError> {
        let assignment = &pkg.assignment;

        let (lms_type, lms_subtype) = match self.registry.get(&assignment.assignment_type) {
            Some(mapping) => (mapping.lms_type.clone(), mapping.lms_subtype.clone()),
            None => match self.policy {
                UnresolvedTypePolicy::PassThrough => {
                    tracing::warn!(
                        assignment_type = %assignment.assignment_type,
                        package = %pkg.metadata.id,
                        "type did not resolve; sending it unchanged"
                    );
                    (assignment.assignment_type.clone(), assignment.subtype.clone())
                }
                UnresolvedTypePolicy::Reject => {
                    return Err(TypeError::NotFound {
                        input: assignment.assignment_type.clone(),
                        suggestions: self.registry.suggest(&assignment.assignment_type),
                    }
                    .into());
                }
            },
        };

        let (questions, code_submission_config) = match &assignment.questions {
            Some(QuestionPayload::CodeSubmission(config)) => (None, Some(config.clone())),
            other => (other.clone(), None),
        };

        Ok(WireAssignment {
            title: assignment.title.clone(),
            description: assignment.description.clone(),
            lms_type,
            lms_subtype,
            category: assignment.category.clone(),
            difficulty: assignment
                .difficulty
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            points: assignment.points,
            instructions: assignment.instructions.clone(),
            criteria: assignment.criteria.clone(),
            auto_grade: assignment.auto_grade,
            show_feedback: assignment.show_feedback,
            shuffle_questions: assignment.shuffle_questions,
            allow_review: assignment.allow_review,
            published: assignment.published,
            quarter: assignment.quarter.clone(),
            track_attempts: assignment.track_attempts,
            track_confidence: assignment.track_confidence,
            track_time_spent: assignment.track_time_spent,
            learning_objectives: assignment.learning_objectives.clone(),
            prerequisites: assignment.prerequisites.clone(),
            recommended_courses: assignment.recommended_courses.clone(),
            tags: assignment.tags.clone(),
            questions,
            code_submission_config,
            due_date: assignment.due_date.map(rfc3339),
            available_from: assignment.available_from.map(rfc3339),
            available_to: assignment.available_to.map(rfc3339),
            time_limit: assignment.time_limit,
            max_attempts: assignment.max_attempts,
            template_id: pkg.metadata.id.clone(),
            version: pkg.metadata.version.clone(),
            source_hash: content_hash(assignment)?,
            imported_from: IMPORTED_FROM.to_string(),
            imported_at: now,
        })
    }
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

//! Package quality validation.
//!
//! The score starts at 100 and each rule deducts a fixed penalty. Errors block
//! synchronization, warnings only lower the score. The result is clamped to
//! `0..=100`.
//!
//! The payload rule keys on the LMS type a name maps to in the built-in table,
//! so aliases (`mcq`, `match`) and mapped names (`quiz`) are held to the same
//! rule as their target. Unknown names are compared as written.

use atk_core::entities::{AssignmentPackage, QuestionPayload};
use atk_core::responses::{ValidationIssue, ValidationResult};
use atk_types::builtin_lms_type;
use chrono::{DateTime, Utc};

/// Version tag stamped on every [`ValidationResult`].
pub const VALIDATOR_VERSION: &str = "1.0.0";

const MISSING_TITLE_PENALTY: i32 = 20;
const MISSING_TYPE_PENALTY: i32 = 20;
const MISSING_PAYLOAD_PENALTY: i32 = 30;
const MISSING_DESCRIPTION_PENALTY: i32 = 5;
const NON_POSITIVE_POINTS_PENALTY: i32 = 10;

/// Validate `pkg` as of now.
#[must_use]
pub fn validate(pkg: &AssignmentPackage) -> ValidationResult {
    validate_at(pkg, Utc::now())
}

/// Validate `pkg`, stamping the result with `now`.
#[must_use]
pub fn validate_at(pkg: &AssignmentPackage, now: DateTime<Utc>) -> ValidationResult {
    let assignment = &pkg.assignment;
    let mut score = 100;
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if assignment.title.trim().is_empty() {
        errors.push(ValidationIssue::new("assignment.title", "Assignment title is required"));
        score -= MISSING_TITLE_PENALTY;
    }

    if assignment.assignment_type.trim().is_empty() {
        errors.push(ValidationIssue::new("assignment.type", "Assignment type is required"));
        score -= MISSING_TYPE_PENALTY;
    }

    if let Some(requirement) = PayloadRequirement::for_type(&assignment.assignment_type) {
        if !requirement.is_satisfied_by(assignment.questions.as_ref()) {
            errors.push(ValidationIssue::new("assignment.questions", requirement.message()));
            score -= MISSING_PAYLOAD_PENALTY;
        }
    }

    if assignment.description.trim().is_empty() {
        warnings.push(ValidationIssue::new(
            "assignment.description",
            "Assignment description is recommended",
        ));
        score -= MISSING_DESCRIPTION_PENALTY;
    }

    if assignment.points <= 0 {
        warnings.push(ValidationIssue::new(
            "assignment.points",
            "Assignment should have positive points",
        ));
        score -= NON_POSITIVE_POINTS_PENALTY;
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        score: u8::try_from(score.clamp(0, 100)).unwrap_or_default(),
        errors,
        warnings,
        validated_at: now,
        validator_version: VALIDATOR_VERSION.to_string(),
    }
}

/// Kinds whose assignments are meaningless without a structured payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadRequirement {
    MultipleChoice,
    Matching,
}

impl PayloadRequirement {
    fn for_type(assignment_type: &str) -> Option<Self> {
        let normalized = assignment_type.trim().to_lowercase();
        match builtin_lms_type(&normalized).unwrap_or(normalized.as_str()) {
            "multiple-choice" => Some(Self::MultipleChoice),
            "matching" => Some(Self::Matching),
            _ => None,
        }
    }

    /// A payload of the wrong variant counts as missing.
    fn is_satisfied_by(self, payload: Option<&QuestionPayload>) -> bool {
        match (self, payload) {
            (Self::MultipleChoice, Some(p @ QuestionPayload::MultipleChoice(_)))
            | (Self::Matching, Some(p @ QuestionPayload::Matching(_))) => !p.is_empty(),
            _ => false,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple choice questions are required",
            Self::Matching => "Matching items are required",
        }
    }
}

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::QuestionPayload;
use crate::enums::Difficulty;

/// The assignment body. Every field here is "substantive": it participates in
/// the content hash and is sent to the LMS.
///
/// Field order is significant: the content hash is computed over the serialized
/// form, so reordering fields changes every existing hash.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Assignment {
    // Basic information
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Portable type name (or alias) as written by the author.
    #[serde(rename = "type")]
    pub assignment_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    // Content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<QuestionPayload>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instructions: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub criteria: String,

    // Scoring and behavior
    pub points: i32,
    /// Minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    pub auto_grade: bool,
    pub show_feedback: bool,
    pub shuffle_questions: bool,
    pub allow_review: bool,

    // Scheduling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quarter: String,

    // Tracking
    pub track_attempts: bool,
    pub track_confidence: bool,
    pub track_time_spent: bool,

    // Educational
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub learning_objectives: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommended_courses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    pub published: bool,
}

impl Assignment {
    /// A new assignment of `assignment_type` with the toolkit's authoring
    /// defaults: one point, auto-graded, feedback and review on, all tracking
    /// on, published, first quarter.
    #[must_use]
    pub fn with_defaults(assignment_type: impl Into<String>) -> Self {
        Self {
            assignment_type: assignment_type.into(),
            points: 1,
            auto_grade: true,
            show_feedback: true,
            allow_review: true,
            track_attempts: true,
            track_confidence: true,
            track_time_spent: true,
            published: true,
            quarter: "Q1".to_string(),
            ..Self::default()
        }
    }
}

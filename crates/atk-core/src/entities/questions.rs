//! Typed question payloads.
//!
//! The payload is serialized untagged with camelCase keys, so a document
//! carries only the payload fields and the variant is recovered from the
//! shape: `question`/`options` for multiple choice, `leftItems`/`rightItems`
//! for matching, `programmingLanguage` for code submissions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Content payload of an assignment, one variant per payload-bearing kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum QuestionPayload {
    MultipleChoice(MultipleChoiceQuestion),
    Matching(MatchingQuestion),
    CodeSubmission(CodeSubmissionConfig),
}

impl QuestionPayload {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MultipleChoice(_) => "multiple-choice",
            Self::Matching(_) => "matching",
            Self::CodeSubmission(_) => "code-submission",
        }
    }

    /// Whether the payload carries no usable content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::MultipleChoice(q) => q.question.trim().is_empty() || q.options.is_empty(),
            Self::Matching(q) => q.left_items.is_empty() && q.right_items.is_empty(),
            Self::CodeSubmission(c) => c.language.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub explanation: String,
}

/// Two parallel lists; `left_items[i]` matches `right_items[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchingQuestion {
    pub left_items: Vec<String>,
    pub right_items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CodeSubmissionConfig {
    #[serde(rename = "programmingLanguage")]
    pub language: String,
    #[serde(rename = "allowFileUpload", default = "default_true")]
    pub allow_upload: bool,
    #[serde(rename = "maxFiles", default = "default_max_files")]
    pub max_files: u32,
    #[serde(rename = "maxFileSizeMb", default = "default_max_size_mb")]
    pub max_size_mb: u32,
    #[serde(rename = "expectedOutput", default, skip_serializing_if = "String::is_empty")]
    pub expected_output: String,
}

impl CodeSubmissionConfig {
    /// Upload-enabled config for `language` with the toolkit's default limits.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            allow_upload: true,
            max_files: default_max_files(),
            max_size_mb: default_max_size_mb(),
            expected_output: String::new(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_files() -> u32 {
    5
}

const fn default_max_size_mb() -> u32 {
    10
}

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Assignment;

/// A reusable assignment skeleton stored under `templates/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub assignment_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    pub template: Assignment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TemplateField>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// A field a template expects the author to fill in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TemplateField {
    pub name: String,
    /// One of `string`, `int`, `bool`, `select`, `multiselect`.
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub validation: String,
}

impl Template {
    /// The starter multiple-choice template written by `atk init`.
    #[must_use]
    pub fn multiple_choice_starter() -> Self {
        Self {
            name: "Multiple Choice Template".to_string(),
            description: "Basic multiple choice question template".to_string(),
            assignment_type: "multiple-choice".to_string(),
            category: String::new(),
            template: Assignment {
                shuffle_questions: false,
                track_attempts: false,
                track_confidence: false,
                track_time_spent: false,
                allow_review: false,
                ..Assignment::with_defaults("multiple-choice")
            },
            fields: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Instantiate the template: the skeleton body with the template's type.
    #[must_use]
    pub fn instantiate(&self) -> Assignment {
        let mut assignment = self.template.clone();
        if assignment.assignment_type.trim().is_empty() {
            assignment.assignment_type.clone_from(&self.assignment_type);
        }
        assignment
    }
}

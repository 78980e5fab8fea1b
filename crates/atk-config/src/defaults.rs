//! Field defaults for newly created assignments.

use serde::{Deserialize, Serialize};

const fn default_points() -> i32 {
    1
}

const fn default_true() -> bool {
    true
}

fn default_quarter() -> String {
    "Q1".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssignmentDefaults {
    #[serde(default = "default_points")]
    pub points: i32,

    #[serde(default = "default_true")]
    pub auto_grade: bool,

    #[serde(default = "default_true")]
    pub published: bool,

    #[serde(default = "default_quarter")]
    pub quarter: String,
}

impl Default for AssignmentDefaults {
    fn default() -> Self {
        Self {
            points: default_points(),
            auto_grade: true,
            published: true,
            quarter: default_quarter(),
        }
    }
}

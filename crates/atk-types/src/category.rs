//! Display grouping for `atk types`.

use std::fmt;

/// Coarse family a portable type is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCategory {
    Quiz,
    Writing,
    Interactive,
    SpeakingListening,
    Programming,
    Media,
    Specialized,
}

impl TypeCategory {
    pub const ALL: [Self; 7] = [
        Self::Quiz,
        Self::Writing,
        Self::Interactive,
        Self::SpeakingListening,
        Self::Programming,
        Self::Media,
        Self::Specialized,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiz => "Quiz & Assessment",
            Self::Writing => "Writing & Essays",
            Self::Interactive => "Interactive",
            Self::SpeakingListening => "Speaking & Listening",
            Self::Programming => "Programming",
            Self::Media => "Media & Uploads",
            Self::Specialized => "Specialized (LMS-specific)",
        }
    }

    /// Category of a canonical portable key. Unknown keys are `Specialized`.
    #[must_use]
    pub fn of(portable_type: &str) -> Self {
        match portable_type {
            "multiple-choice" | "true-false" | "matching" | "quiz" => Self::Quiz,
            "writing-short" | "writing-long" | "essay" => Self::Writing,
            t if t.starts_with("drag-drop-") => Self::Interactive,
            "speaking" | "listening" | "presentation" | "comprehension" => Self::SpeakingListening,
            "code-submission" => Self::Programming,
            "image-upload" => Self::Media,
            _ => Self::Specialized,
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

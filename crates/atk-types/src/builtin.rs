//! The built-in type table.
//!
//! LMS type strings are fixed by the remote system and must not change.

/// `(portable, lms_type, lms_subtype, description)` in display order.
pub const TYPES: &[(&str, &str, &str, &str)] = &[
    ("multiple-choice", "multiple-choice", "", "Multiple choice questions"),
    ("true-false", "true-false", "", "True/false questions"),
    ("matching", "matching", "", "Match items from two lists"),
    ("writing-short", "writing", "", "Short writing assignments"),
    ("writing-long", "writing-long", "", "Extended writing assignments"),
    ("speaking", "speaking", "", "Oral presentation assignments"),
    ("listening", "listening", "", "Audio comprehension exercises"),
    ("code-submission", "code-submission", "", "Programming assignments"),
    ("image-upload", "image-upload", "", "Image upload assignments"),
    // LMS-specific exercises
    ("line-match", "line-match", "", "Line matching exercises (LMS specific)"),
    ("phoneme-build", "phoneme-build", "", "Phoneme building exercises (LMS specific)"),
    // One LMS type, distinguished by subtype
    ("drag-drop-ordering", "drag-and-drop", "ordering", "Drag and drop ordering"),
    ("drag-drop-categorization", "drag-and-drop", "categorization", "Drag and drop categorization"),
    ("drag-drop-fill-blank", "drag-and-drop", "fill-blank", "Drag and drop fill in blanks"),
    ("drag-drop-labeling", "drag-and-drop", "labeling", "Drag and drop labeling"),
    ("drag-drop-image-caption", "drag-and-drop", "image-caption", "Drag and drop image captions"),
    ("generic-assignment", "assignment", "", "Generic assignment type"),
    // Portable-only names with no LMS counterpart of their own
    ("essay", "writing-long", "", "Essay assignment (mapped to writing-long)"),
    ("quiz", "multiple-choice", "", "Quiz assignment (mapped to multiple-choice)"),
    ("presentation", "speaking", "", "Presentation (mapped to speaking)"),
    ("comprehension", "listening", "", "Comprehension exercise (mapped to listening)"),
];

/// `(alias, portable target)`. `essay` is shadowed by the canonical key of the
/// same name.
pub const ALIASES: &[(&str, &str)] = &[
    ("mcq", "multiple-choice"),
    ("mc", "multiple-choice"),
    ("tf", "true-false"),
    ("t/f", "true-false"),
    ("match", "matching"),
    ("essay", "writing-long"),
    ("short-essay", "writing-short"),
    ("code", "code-submission"),
    ("programming", "code-submission"),
    ("drag-drop", "drag-drop-ordering"),
    ("dnd", "drag-drop-ordering"),
    ("oral", "speaking"),
    ("audio", "listening"),
    ("image", "image-upload"),
    ("upload", "image-upload"),
];

/// LMS type for `input` looked up directly in the built-in tables, for callers
/// that have no [`TypeRegistry`](crate::TypeRegistry) at hand. Canonical keys
/// shadow aliases, as in the registry.
#[must_use]
pub fn builtin_lms_type(input: &str) -> Option<&'static str> {
    let key = input.trim().to_lowercase();
    let lms_of = |portable: &str| {
        TYPES
            .iter()
            .find(|(p, ..)| *p == portable)
            .map(|(_, lms, ..)| *lms)
    };
    lms_of(&key).or_else(|| {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .and_then(|(_, target)| lms_of(target))
    })
}

//! Type registry error types.

use thiserror::Error;

/// Errors raised while building or querying a [`crate::TypeRegistry`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input matched neither a portable type nor an alias.
    #[error("unknown assignment type: {input}")]
    NotFound {
        /// The input as given by the caller.
        input: String,
        /// Close matches, in discovery order. May be empty.
        suggestions: Vec<String>,
    },

    /// Two mappings share the same portable key.
    #[error("duplicate portable type: {0}")]
    DuplicateType(String),

    /// An alias points at a portable type that does not exist.
    #[error("alias '{alias}' points to unknown type '{target}'")]
    DanglingAlias { alias: String, target: String },
}

impl TypeError {
    /// Suggestions attached to a resolution failure; empty for other variants.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            Self::DuplicateType(_) | Self::DanglingAlias { .. } => &[],
        }
    }
}

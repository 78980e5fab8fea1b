//! Cross-cutting error types for the assignment toolkit.
//!
//! Domain-specific errors (`TypeError`, `PackageError`, `LmsError`) live in
//! their respective crates. They converge into `anyhow` in `atk-cli`.

use thiserror::Error;

/// Errors that can be raised by any toolkit crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string could not be parsed into one of the model enums.
    #[error("Invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

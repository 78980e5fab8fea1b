//! LMS error types.

use std::path::PathBuf;

use atk_package::PackageError;
use thiserror::Error;

/// Errors that can occur when talking to the LMS.
#[derive(Debug, Error)]
pub enum LmsError {
    /// HTTP transport error (connection, timeout, body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The LMS returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the LMS.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API key was rejected.
    #[error("authentication failed - check your API key")]
    Unauthorized,

    /// Failed to parse an LMS response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A resource file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package has blocking validation errors.
    #[error("package failed validation: {}", errors.join("; "))]
    Invalid { errors: Vec<String> },

    /// The package could not be converted for upload.
    #[error(transparent)]
    Package(#[from] PackageError),
}

//! Shared HTTP response helpers for the LMS client.
//!
//! Centralizes status-code checks (401 → [`LmsError::Unauthorized`],
//! non-success → [`LmsError::Api`]) and body decoding so the client methods
//! stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::LmsError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`LmsError::Unauthorized`]
/// - **Non-success status** → [`LmsError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LmsError> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(LmsError::Unauthorized);
    }
    if !resp.status().is_success() {
        return Err(LmsError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON body, reporting malformed payloads as [`LmsError::Parse`].
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, LmsError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| LmsError::Parse(e.to_string()))
}

//! The LMS import API and its reqwest implementation.

use std::future::Future;
use std::time::Duration;

use atk_core::entities::Resource;
use atk_package::WireAssignment;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::LmsError;
use crate::http::{check_response, read_json};

/// Assignment created by the LMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAssignment {
    pub id: String,
    pub message: String,
}

/// A resource file ready for upload.
#[derive(Debug, Clone)]
pub struct ResourceUpload<'a> {
    pub assignment_id: &'a str,
    pub resource: &'a Resource,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Operations the synchronizer needs from the LMS.
pub trait LmsApi: Sync {
    /// `POST /api/assignments`.
    fn create_assignment(
        &self,
        assignment: &WireAssignment,
    ) -> impl Future<Output = Result<CreatedAssignment, LmsError>> + Send;

    /// `POST /api/resources` (multipart). Returns the resource id.
    fn upload_resource(
        &self,
        upload: ResourceUpload<'_>,
    ) -> impl Future<Output = Result<String, LmsError>> + Send;

    /// `GET /api/assignments?sourceHash=`. `None` when no assignment carries
    /// the hash.
    fn find_by_source_hash(
        &self,
        hash: &str,
    ) -> impl Future<Output = Result<Option<String>, LmsError>> + Send;

    /// `GET /api/auth/me`.
    fn test_auth(&self) -> impl Future<Output = Result<(), LmsError>> + Send;
}

#[derive(Deserialize)]
struct AssignmentEnvelope {
    assignment: IdOnly,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ResourceEnvelope {
    resource: IdOnly,
}

#[derive(Deserialize)]
struct IdOnly {
    id: String,
}

/// HTTP client for one LMS instance. Every request carries the API key as a
/// bearer token and is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct LmsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LmsClient {
    /// # Errors
    ///
    /// Returns [`LmsError::Http`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, LmsError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("assignment-toolkit/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl LmsApi for LmsClient {
    async fn create_assignment(
        &self,
        assignment: &WireAssignment,
    ) -> Result<CreatedAssignment, LmsError> {
        let resp = self
            .http
            .post(self.url("/api/assignments"))
            .bearer_auth(&self.api_key)
            .json(assignment)
            .send()
            .await?;
        let envelope: AssignmentEnvelope = read_json(check_response(resp).await?).await?;
        Ok(CreatedAssignment {
            id: envelope.assignment.id,
            message: envelope.message,
        })
    }

    async fn upload_resource(&self, upload: ResourceUpload<'_>) -> Result<String, LmsError> {
        let form = Form::new()
            .part("file", Part::bytes(upload.bytes).file_name(upload.file_name))
            .text("title", upload.resource.title.clone())
            .text("description", upload.resource.description.clone())
            .text("type", upload.resource.resource_type.clone())
            .text("assignmentId", upload.assignment_id.to_string());

        let resp = self
            .http
            .post(self.url("/api/resources"))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        let envelope: ResourceEnvelope = read_json(check_response(resp).await?).await?;
        Ok(envelope.resource.id)
    }

    async fn find_by_source_hash(&self, hash: &str) -> Result<Option<String>, LmsError> {
        let url = self.url(&format!(
            "/api/assignments?sourceHash={}",
            urlencoding::encode(hash)
        ));
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: AssignmentEnvelope = read_json(check_response(resp).await?).await?;
        Ok(Some(envelope.assignment.id))
    }

    async fn test_auth(&self) -> Result<(), LmsError> {
        let resp = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

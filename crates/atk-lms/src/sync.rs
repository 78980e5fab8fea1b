//! Package and batch synchronization.

use atk_core::entities::Resource;
use atk_core::enums::ImportStatus;
use atk_core::responses::{BatchImportResult, ImportResult};
use atk_package::{Converter, LoadedPackage, validate};
use chrono::Utc;
use futures::{StreamExt, stream};

use crate::client::{LmsApi, ResourceUpload};
use crate::error::LmsError;

/// Knobs for [`Synchronizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Look up the content hash before creating an assignment.
    pub skip_duplicates: bool,
    /// Packages in flight during [`Synchronizer::sync_batch`]. Zero is treated
    /// as one.
    pub concurrency: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            skip_duplicates: true,
            concurrency: 1,
        }
    }
}

/// Pushes packages to an LMS.
pub struct Synchronizer<'a, A> {
    api: &'a A,
    converter: Converter<'a>,
    options: SyncOptions,
}

impl<'a, A: LmsApi> Synchronizer<'a, A> {
    pub const fn new(api: &'a A, converter: Converter<'a>, options: SyncOptions) -> Self {
        Self {
            api,
            converter,
            options,
        }
    }

    /// Synchronize one package.
    ///
    /// Packages with blocking validation errors are never sent. Returns
    /// `exists` when duplicate checking finds the hash of the current body
    /// already imported. A resource upload failure stops further uploads and
    /// downgrades the result to `partial`; the assignment itself is kept.
    ///
    /// # Errors
    ///
    /// Returns [`LmsError::Invalid`] for packages that fail validation, and
    /// [`LmsError`] when conversion, the duplicate lookup, or the assignment
    /// creation fails.
    pub async fn sync_package(&self, loaded: &LoadedPackage) -> Result<ImportResult, LmsError> {
        let pkg = &loaded.package;
        let validation = validate(pkg);
        if !validation.is_valid {
            return Err(LmsError::Invalid {
                errors: validation.errors.iter().map(|e| e.message.clone()).collect(),
            });
        }

        let wire = self.converter.to_wire(pkg)?;
        let recorded = pkg.metadata.source_hash.trim();
        if !recorded.is_empty() && !recorded.eq_ignore_ascii_case(&wire.source_hash) {
            tracing::warn!(package = %pkg.metadata.id, "recorded content hash is stale; using the current body");
        }

        if self.options.skip_duplicates {
            if let Some(existing) = self.api.find_by_source_hash(&wire.source_hash).await? {
                tracing::info!(package = %pkg.metadata.id, assignment = %existing, "already imported");
                return Ok(ImportResult::exists(existing));
            }
        }

        let created = self.api.create_assignment(&wire).await?;
        tracing::info!(package = %pkg.metadata.id, assignment = %created.id, "assignment created");

        let mut result = ImportResult::success(created.id, created.message);
        let assignment_id = result.assignment_id.clone().unwrap_or_default();

        for resource in pkg.resources.iter().filter(|r| r.has_local_file()) {
            match self.upload(loaded, &assignment_id, resource).await {
                Ok(id) => result.resource_ids.push(id),
                Err(err) => {
                    tracing::warn!(resource = %resource.title, %err, "resource upload failed");
                    result.status = ImportStatus::Partial;
                    if !result.message.is_empty() {
                        result.message.push(' ');
                    }
                    result.message.push_str(&format!(
                        "Warning: Resource upload failed: failed to upload {}: {err}",
                        resource.title
                    ));
                    break;
                }
            }
        }

        Ok(result)
    }

    async fn upload(
        &self,
        loaded: &LoadedPackage,
        assignment_id: &str,
        resource: &Resource,
    ) -> Result<String, LmsError> {
        let path = loaded.resource_path(resource);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| LmsError::Io {
                path: path.clone(),
                source,
            })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resource")
            .to_string();

        self.api
            .upload_resource(ResourceUpload {
                assignment_id,
                resource,
                file_name,
                bytes,
            })
            .await
    }

    /// Synchronize every package, never stopping at a failure.
    ///
    /// Per-item errors become `failed` results. Results keep input order
    /// regardless of concurrency.
    pub async fn sync_batch(&self, packages: &[LoadedPackage]) -> BatchImportResult {
        let batch_id = uuid::Uuid::new_v4().to_string();
        let started_at = Utc::now();
        tracing::info!(%batch_id, total = packages.len(), "batch sync started");

        let results: Vec<ImportResult> = stream::iter(packages)
            .map(|loaded| async move {
                self.sync_package(loaded).await.unwrap_or_else(|err| {
                    tracing::warn!(path = %loaded.path.display(), %err, "package sync failed");
                    ImportResult::failed(err.to_string())
                })
            })
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await;

        let batch = BatchImportResult::from_results(batch_id, results, started_at, Utc::now());
        tracing::info!(
            batch_id = %batch.batch_id,
            succeeded = batch.success_count,
            failed = batch.failure_count,
            "batch sync finished"
        );
        batch
    }
}

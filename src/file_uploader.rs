//! Concurrent multipart file uploads.
//!
//! [`FileUploader::upload`] takes a batch of (payload, destination) pairs,
//! issues one multipart POST per pair with no concurrency cap, and resolves
//! with an [`UploadOutcome`] under one of two completion policies. Failures
//! are data: network and IO errors are folded into the outcome and never
//! escape the call.

use crate::types::UploadSource;
use futures::future;
use serde::{Deserialize, Serialize};

/// A single payload/destination pair, immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadItem {
    pub source: UploadSource,
    pub destination: String,
}

impl UploadItem {
    pub fn new(source: impl Into<UploadSource>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// How a batch of uploads resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionPolicy {
    /// Wait for every request; the first rejection becomes the outcome and
    /// the remaining requests' individual results are not reported.
    #[default]
    FailFast,
    /// Wait for every request to settle and report the failed subset.
    BestEffort,
}

impl CompletionPolicy {
    /// Map the boolean toggle used by callback-style callers.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            CompletionPolicy::FailFast
        } else {
            CompletionPolicy::BestEffort
        }
    }
}

/// One rejected request in a best-effort batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedUpload {
    pub file_name: String,
    pub destination: String,
    pub error: String,
}

/// Discriminated union describing how the batch completed.
///
/// Serializes with the wire status tags callers match on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum UploadOutcome {
    /// Fail-fast batch where every request resolved.
    #[serde(rename = "ALL_FILES_UPLOADED")]
    AllUploaded { ok: bool },
    /// Fail-fast batch where at least one request rejected; carries the
    /// first encountered error only.
    #[serde(rename = "AN_UPLOAD_FAILED")]
    UploadFailed { ok: bool, error: String },
    /// Best-effort batch with at least one success; the failed subset may be
    /// empty.
    #[serde(rename = "ONE_OR_MORE_UPLOADS_FAILED")]
    SomeFailed {
        ok: bool,
        #[serde(rename = "failedUploads")]
        failed_uploads: Vec<FailedUpload>,
    },
    /// Best-effort batch where every request rejected.
    #[serde(rename = "ALL_UPLOADS_FAILED")]
    AllFailed {
        ok: bool,
        #[serde(rename = "failedUploads")]
        failed_uploads: Vec<FailedUpload>,
    },
}

impl UploadOutcome {
    fn all_uploaded() -> Self {
        UploadOutcome::AllUploaded { ok: true }
    }

    fn upload_failed(error: String) -> Self {
        UploadOutcome::UploadFailed { ok: false, error }
    }

    fn some_failed(failed_uploads: Vec<FailedUpload>) -> Self {
        UploadOutcome::SomeFailed {
            ok: true,
            failed_uploads,
        }
    }

    fn all_failed(failed_uploads: Vec<FailedUpload>) -> Self {
        UploadOutcome::AllFailed {
            ok: false,
            failed_uploads,
        }
    }

    /// Overall-ok flag carried by the outcome.
    pub fn is_ok(&self) -> bool {
        match self {
            UploadOutcome::AllUploaded { ok }
            | UploadOutcome::UploadFailed { ok, .. }
            | UploadOutcome::SomeFailed { ok, .. }
            | UploadOutcome::AllFailed { ok, .. } => *ok,
        }
    }

    /// Wire status tag for this outcome.
    pub fn status(&self) -> &'static str {
        match self {
            UploadOutcome::AllUploaded { .. } => "ALL_FILES_UPLOADED",
            UploadOutcome::UploadFailed { .. } => "AN_UPLOAD_FAILED",
            UploadOutcome::SomeFailed { .. } => "ONE_OR_MORE_UPLOADS_FAILED",
            UploadOutcome::AllFailed { .. } => "ALL_UPLOADS_FAILED",
        }
    }

    /// Get the first-error detail of a fail-fast batch, None otherwise.
    pub fn error(&self) -> Option<&str> {
        match self {
            UploadOutcome::UploadFailed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Get the failed subset of a best-effort batch, None otherwise.
    pub fn failed_uploads(&self) -> Option<&[FailedUpload]> {
        match self {
            UploadOutcome::SomeFailed { failed_uploads, .. }
            | UploadOutcome::AllFailed { failed_uploads, .. } => Some(failed_uploads),
            _ => None,
        }
    }
}

/// Multipart field name derived from the payload MIME type.
fn multipart_field_name(mime_type: &str) -> &'static str {
    if mime_type.contains("image") {
        "image"
    } else {
        "file"
    }
}

/// Orchestrates concurrent multipart uploads over a shared HTTP client.
pub struct FileUploader {
    client: reqwest::Client,
}

impl FileUploader {
    /// Create an uploader with a default client.
    ///
    /// No request timeout is set; callers that need one supply their own
    /// client through [`FileUploader::with_client`].
    pub fn new() -> Self {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("MediaKit/{}", version);

        let client = reqwest::Client::builder()
            .user_agent(&user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Create an uploader over a caller-built client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Upload every item concurrently and resolve per the completion policy.
    ///
    /// All requests are issued back-to-back; the call suspends once, on the
    /// combined completion. An empty batch performs no network I/O and
    /// resolves immediately as success (fail-fast reports all files
    /// uploaded, best-effort reports an empty failed list).
    pub async fn upload(&self, items: &[UploadItem], policy: CompletionPolicy) -> UploadOutcome {
        tracing::info!("Uploading {} file(s) ({:?})", items.len(), policy);

        let outcome = match policy {
            CompletionPolicy::FailFast => {
                let requests = items.iter().map(|item| self.send_one(item));
                match future::try_join_all(requests).await {
                    Ok(_) => UploadOutcome::all_uploaded(),
                    Err(failed) => UploadOutcome::upload_failed(format!(
                        "Failed to upload {}: {}",
                        failed.file_name, failed.error
                    )),
                }
            }
            CompletionPolicy::BestEffort => {
                let requests = items.iter().map(|item| self.send_one(item));
                let failed: Vec<FailedUpload> = future::join_all(requests)
                    .await
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();

                if !items.is_empty() && failed.len() == items.len() {
                    UploadOutcome::all_failed(failed)
                } else {
                    UploadOutcome::some_failed(failed)
                }
            }
        };

        tracing::info!("Upload batch complete: {}", outcome.status());
        outcome
    }

    async fn send_one(&self, item: &UploadItem) -> Result<(), FailedUpload> {
        self.post_item(item).await.map_err(|error| {
            tracing::warn!(
                "Upload of {} to {} failed: {}",
                item.source.file_name,
                item.destination,
                error
            );
            FailedUpload {
                file_name: item.source.file_name.clone(),
                destination: item.destination.clone(),
                error,
            }
        })
    }

    async fn post_item(&self, item: &UploadItem) -> Result<(), String> {
        let url = reqwest::Url::parse(&item.destination)
            .map_err(|e| format!("Invalid destination URL: {}", e))?;

        let form = build_form(&item.source).await?;

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Upload failed {}: {}", status, error_text));
        }

        Ok(())
    }
}

impl Default for FileUploader {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a multipart form with exactly one field carrying the payload.
async fn build_form(source: &UploadSource) -> Result<reqwest::multipart::Form, String> {
    let path = source.uri.strip_prefix("file://").unwrap_or(&source.uri);

    let contents = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", source.uri, e))?;

    let part = reqwest::multipart::Part::bytes(contents)
        .file_name(source.file_name.clone())
        .mime_str(&source.mime_type)
        .map_err(|e| format!("Invalid MIME type {}: {}", source.mime_type, e))?;

    Ok(reqwest::multipart::Form::new().part(multipart_field_name(&source.mime_type), part))
}

//! Document Uploader Port
//!
//! The uploader accepts a file plus claim metadata and returns the hosted
//! location. Different backends spell the response fields differently, so
//! the raw response is kept as JSON and resolved through fixed fallback key
//! orders rather than a rigid struct.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use core_kernel::{
    AdapterHealth, ApplicationId, DocumentCategory, DomainPort, HealthCheckResult,
    HealthCheckable, PolicyId, PortError, UserId,
};

use crate::file::FileSource;

/// Document-type tag carried by every claim document upload
pub const CLAIM_DOCUMENT_TYPE: &str = "claim-document";

/// Callback invoked with increasing integer percentages (0-100).
///
/// May be invoked zero or more times; all invocations for one file happen
/// before that file's terminal success or failure update.
pub type ProgressSink = Arc<dyn Fn(u8) + Send + Sync>;

/// Everything the uploader needs for one file
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub source: FileSource,
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    /// Constant tag for claim documents, see [`CLAIM_DOCUMENT_TYPE`]
    pub document_type: String,
    pub uploader_id: UserId,
    pub policy_id: Option<PolicyId>,
    /// Absent before the claim record exists; files uploaded without it
    /// land on a staging path
    pub claim_id: Option<ApplicationId>,
    pub category: DocumentCategory,
}

/// The uploader's response, kept raw
///
/// Accessors resolve each field through a fixed fallback order of key
/// spellings; the first present string wins.
#[derive(Debug, Clone)]
pub struct RawUploadResponse(Value);

impl RawUploadResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    fn first_string(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    /// The hosted URL of the uploaded file
    pub fn file_url(&self) -> Option<&str> {
        self.first_string(&["fileUrl", "file_url", "url", "publicUrl", "public_url", "location"])
    }

    /// The server-assigned document id
    pub fn document_id(&self) -> Option<&str> {
        self.first_string(&["documentId", "document_id", "id"])
    }

    /// The stored file name, possibly corrected by the server
    pub fn file_name(&self) -> Option<&str> {
        self.first_string(&["fileName", "file_name", "name"])
    }
}

/// Uploads one file and reports progress along the way
#[async_trait]
pub trait DocumentUploader: DomainPort + HealthCheckable {
    async fn upload(
        &self,
        request: UploadRequest,
        progress: ProgressSink,
    ) -> Result<RawUploadResponse, PortError>;
}

/// A recorded call against the in-memory uploader, for assertions
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub file_name: String,
    pub category: DocumentCategory,
    pub policy_id: Option<PolicyId>,
    pub claim_id: Option<ApplicationId>,
}

/// In-memory implementation of `DocumentUploader`
///
/// Fabricates hosted URLs under a base URL and sequential document ids.
/// Used by unit tests and by the demo wiring of the API server. Failure
/// scripting (per file name, or for all staging uploads) and an upload gate
/// let tests steer concurrency and error paths deterministically.
pub struct InMemoryUploader {
    base_url: String,
    sequence: AtomicU64,
    /// file name -> raw error text to fail that file with
    scripted_failures: RwLock<HashMap<String, String>>,
    /// fail every request that carries no claim id
    fail_staging: AtomicBool,
    gate: tokio::sync::watch::Sender<bool>,
    calls: Mutex<Vec<RecordedUpload>>,
}

impl InMemoryUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (gate, _) = tokio::sync::watch::channel(true);
        Self {
            base_url: base_url.into(),
            sequence: AtomicU64::new(1),
            scripted_failures: RwLock::new(HashMap::new()),
            fail_staging: AtomicBool::new(false),
            gate,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Holds every upload until [`release_uploads`](Self::release_uploads)
    pub fn hold_uploads(&self) {
        self.gate.send_replace(false);
    }

    /// Releases uploads held by [`hold_uploads`](Self::hold_uploads)
    pub fn release_uploads(&self) {
        self.gate.send_replace(true);
    }

    /// Scripts a failure for the named file; `raw_error` is what the
    /// orchestrator will classify
    pub fn fail_file(&self, file_name: impl Into<String>, raw_error: impl Into<String>) {
        self.scripted_failures
            .write()
            .unwrap()
            .insert(file_name.into(), raw_error.into());
    }

    /// Clears a scripted failure so retries succeed
    pub fn clear_failure(&self, file_name: &str) {
        self.scripted_failures.write().unwrap().remove(file_name);
    }

    /// Fails every upload that has no claim reference yet
    pub fn fail_staging_uploads(&self, enabled: bool) {
        self.fail_staging.store(enabled, Ordering::SeqCst);
    }

    /// All calls made so far, in arrival order
    pub fn recorded(&self) -> Vec<RecordedUpload> {
        self.calls.lock().unwrap().clone()
    }
}

impl DomainPort for InMemoryUploader {}

#[async_trait]
impl HealthCheckable for InMemoryUploader {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory-uploader".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DocumentUploader for InMemoryUploader {
    async fn upload(
        &self,
        request: UploadRequest,
        progress: ProgressSink,
    ) -> Result<RawUploadResponse, PortError> {
        self.calls.lock().unwrap().push(RecordedUpload {
            file_name: request.file_name.clone(),
            category: request.category.clone(),
            policy_id: request.policy_id,
            claim_id: request.claim_id,
        });

        // Park here while tests hold the gate closed
        let mut gate = self.gate.subscribe();
        gate.wait_for(|open| *open)
            .await
            .map_err(|_| PortError::connection("uploader gate dropped"))?;

        progress(20);

        if let Some(raw) = self
            .scripted_failures
            .read()
            .unwrap()
            .get(&request.file_name)
            .cloned()
        {
            return Err(PortError::ServiceUnavailable { service: raw });
        }

        if request.claim_id.is_none() && self.fail_staging.load(Ordering::SeqCst) {
            return Err(PortError::ServiceUnavailable {
                service: "network connection refused by staging store".to_string(),
            });
        }

        progress(65);

        let document_id = format!("doc-{:06}", self.sequence.fetch_add(1, Ordering::SeqCst));
        let scope = request
            .claim_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "staging".to_string());

        Ok(RawUploadResponse::new(json!({
            "fileUrl": format!("{}/{}/{}/{}", self.base_url, scope, document_id, request.file_name),
            "documentId": document_id,
            "fileName": request.file_name,
        })))
    }
}

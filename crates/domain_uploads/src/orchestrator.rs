//! Upload orchestration
//!
//! Manages concurrent, independent uploads of an arbitrary number of files,
//! each tagged with a document category. A file starts uploading the moment
//! it is added - there is no queue or backpressure, N files added together
//! run N concurrent uploads. The orchestrator is the single writer of the
//! file list; spawned tasks and progress callbacks mutate records by
//! `FileId` lookup only, so completions arriving in any order cannot race
//! on positions.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, warn};

use core_kernel::{ApplicationId, DocumentCategory, FileId, PolicyId, UserId};

use crate::failure::UploadFailure;
use crate::file::{FileSnapshot, NewFile, UploadedFile};
use crate::ports::{
    DocumentUploader, ProgressSink, UploadRequest, CLAIM_DOCUMENT_TYPE,
};

/// Identity and scope carried on every upload from one wizard session
#[derive(Debug, Clone)]
pub struct UploadContext {
    pub uploader_id: UserId,
    pub policy_id: Option<PolicyId>,
}

/// A successfully hosted document, ready to be attached to the claim
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompletedUpload {
    pub category: DocumentCategory,
    pub file_name: String,
    pub url: String,
    pub document_id: Option<String>,
}

/// Errors raised by the orchestrator
#[derive(Debug, Error)]
pub enum UploadsError {
    #[error("File not found in the upload list: {0}")]
    FileNotFound(FileId),

    #[error("Only failed uploads can be retried: {0}")]
    RetryNotAllowed(FileId),

    #[error(
        "Required documents are still missing: {}. {succeeded} file(s) uploaded successfully.",
        .missing.join(", ")
    )]
    MissingRequiredDocuments {
        /// Display names of the uncovered required categories
        missing: Vec<String>,
        /// How many files did upload successfully in this pass
        succeeded: usize,
    },
}

/// Owns the upload list for one wizard session
pub struct UploadOrchestrator {
    uploader: Arc<dyn DocumentUploader>,
    context: RwLock<UploadContext>,
    files: Arc<RwLock<Vec<UploadedFile>>>,
    tasks: Mutex<HashMap<FileId, JoinHandle<()>>>,
}

impl UploadOrchestrator {
    pub fn new(uploader: Arc<dyn DocumentUploader>, context: UploadContext) -> Self {
        Self {
            uploader,
            context: RwLock::new(context),
            files: Arc::new(RwLock::new(Vec::new())),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Updates the policy scope for subsequent uploads.
    ///
    /// The policy is chosen in step 1 of the wizard, before any file exists,
    /// so uploads carry the reference once one is selected.
    pub fn set_policy(&self, policy_id: Option<PolicyId>) {
        self.context.write().unwrap().policy_id = policy_id;
    }

    /// Registers a file and immediately starts its upload.
    ///
    /// Must be called from within a Tokio runtime; the upload task is
    /// spawned detached and reports back through the shared list.
    pub fn add_file(&self, selection: NewFile) -> FileId {
        let file = UploadedFile::begin(selection);
        let id = file.id;
        let request = self.request_for(&file, None);

        debug!(file_id = %id, category = %file.category, "starting upload");
        self.files.write().unwrap().push(file);
        self.spawn_task(id, request);
        id
    }

    /// Retries a failed file with the same source and category, from 0%.
    pub fn retry(&self, id: FileId) -> Result<(), UploadsError> {
        let request = {
            let mut files = self.files.write().unwrap();
            let file = files
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or(UploadsError::FileNotFound(id))?;

            if !file.failed() {
                return Err(UploadsError::RetryNotAllowed(id));
            }

            file.error = None;
            file.uploading = true;
            file.progress = 0;
            self.request_for(file, None)
        };

        debug!(file_id = %id, "retrying upload");
        self.spawn_task(id, request);
        Ok(())
    }

    /// Removes a file from the list and aborts its in-flight upload, so a
    /// late completion callback becomes a no-op.
    pub fn remove(&self, id: FileId) -> Result<(), UploadsError> {
        if let Some(handle) = self.tasks.lock().unwrap().remove(&id) {
            handle.abort();
        }

        let mut files = self.files.write().unwrap();
        let before = files.len();
        files.retain(|f| f.id != id);
        if files.len() == before {
            return Err(UploadsError::FileNotFound(id));
        }
        debug!(file_id = %id, "removed file");
        Ok(())
    }

    /// Clones the current file list
    pub fn files(&self) -> Vec<UploadedFile> {
        self.files.read().unwrap().clone()
    }

    /// Read-only snapshots for API responses
    pub fn snapshots(&self) -> Vec<FileSnapshot> {
        self.files.read().unwrap().iter().map(FileSnapshot::from).collect()
    }

    /// Looks up one file by id
    pub fn file(&self, id: FileId) -> Option<UploadedFile> {
        self.files.read().unwrap().iter().find(|f| f.id == id).cloned()
    }

    /// Categories that have at least one file in the list, regardless of
    /// upload state. This is the presence-only strength used by the
    /// document step's gate.
    pub fn categories_present(&self) -> HashSet<DocumentCategory> {
        self.files
            .read()
            .unwrap()
            .iter()
            .map(|f| f.category.clone())
            .collect()
    }

    /// Categories that have at least one successfully uploaded file. This
    /// is the stronger coverage required at final submission.
    pub fn categories_succeeded(&self) -> HashSet<DocumentCategory> {
        self.files
            .read()
            .unwrap()
            .iter()
            .filter(|f| f.succeeded())
            .map(|f| f.category.clone())
            .collect()
    }

    /// Waits until every spawned upload task has settled.
    ///
    /// Intended for tests and shutdown paths; the wizard itself never
    /// blocks on uploads outside the aggregate submission pass.
    pub async fn wait_idle(&self) {
        loop {
            let handles: Vec<JoinHandle<()>> = {
                let mut tasks = self.tasks.lock().unwrap();
                let ids: Vec<FileId> = tasks.keys().copied().collect();
                ids.into_iter().filter_map(|id| tasks.remove(&id)).collect()
            };
            if handles.is_empty() {
                return;
            }
            for handle in handles {
                // Aborted tasks surface a JoinError; both outcomes mean settled
                let _ = handle.await;
            }
        }
    }

    /// Uploads every file not already in a successful terminal state, now
    /// scoped to the created claim, and awaits all settlements - failures
    /// do not short-circuit their siblings.
    ///
    /// Afterwards every `required` category must be covered by at least one
    /// successful upload; on shortfall the error lists the missing display
    /// names and how many files did succeed. Already-successful files pass
    /// through without re-upload.
    pub async fn upload_outstanding(
        &self,
        claim_id: ApplicationId,
        required: &[(DocumentCategory, String)],
    ) -> Result<Vec<CompletedUpload>, UploadsError> {
        let context = self.context.read().unwrap().clone();
        let outstanding: Vec<(FileId, UploadRequest)> = {
            let mut files = self.files.write().unwrap();
            files
                .iter_mut()
                .filter(|f| !f.succeeded())
                .map(|file| {
                    file.uploading = true;
                    file.error = None;
                    file.progress = 0;
                    (file.id, request_for(&context, file, Some(claim_id)))
                })
                .collect()
        };

        // First attempts may still be in flight for some of these files;
        // abort them so a stale completion cannot overwrite this pass.
        {
            let mut tasks = self.tasks.lock().unwrap();
            for (id, _) in &outstanding {
                if let Some(handle) = tasks.remove(id) {
                    handle.abort();
                }
            }
        }

        debug!(
            claim_id = %claim_id,
            outstanding = outstanding.len(),
            "running aggregate upload pass"
        );

        let mut set = JoinSet::new();
        for (id, request) in outstanding {
            let uploader = Arc::clone(&self.uploader);
            let files = Arc::clone(&self.files);
            set.spawn(perform_upload(uploader, files, id, request));
        }
        while set.join_next().await.is_some() {}

        let (succeeded_categories, succeeded_count, completed) = {
            let files = self.files.read().unwrap();
            let categories: HashSet<DocumentCategory> = files
                .iter()
                .filter(|f| f.succeeded())
                .map(|f| f.category.clone())
                .collect();
            let count = files.iter().filter(|f| f.succeeded()).count();
            let completed: Vec<CompletedUpload> = files
                .iter()
                .filter(|f| f.succeeded())
                .map(|f| CompletedUpload {
                    category: f.category.clone(),
                    file_name: f.name.clone(),
                    url: f.uploaded_url.clone().unwrap_or_default(),
                    document_id: f.document_id.clone(),
                })
                .collect();
            (categories, count, completed)
        };

        let missing: Vec<String> = required
            .iter()
            .filter(|(category, _)| !succeeded_categories.contains(category))
            .map(|(_, display_name)| display_name.clone())
            .collect();

        if !missing.is_empty() {
            warn!(claim_id = %claim_id, ?missing, "required documents uncovered after upload pass");
            return Err(UploadsError::MissingRequiredDocuments {
                missing,
                succeeded: succeeded_count,
            });
        }

        Ok(completed)
    }

    fn request_for(&self, file: &UploadedFile, claim_id: Option<ApplicationId>) -> UploadRequest {
        let context = self.context.read().unwrap().clone();
        request_for(&context, file, claim_id)
    }

    fn spawn_task(&self, id: FileId, request: UploadRequest) {
        let uploader = Arc::clone(&self.uploader);
        let files = Arc::clone(&self.files);
        let handle = tokio::spawn(perform_upload(uploader, files, id, request));
        // A retry replaces any finished handle for the same file
        self.tasks.lock().unwrap().insert(id, handle);
    }
}

fn request_for(
    context: &UploadContext,
    file: &UploadedFile,
    claim_id: Option<ApplicationId>,
) -> UploadRequest {
    UploadRequest {
        source: file.source.clone(),
        file_name: file.name.clone(),
        mime_type: file.mime_type.clone(),
        size: file.size,
        document_type: CLAIM_DOCUMENT_TYPE.to_string(),
        uploader_id: context.uploader_id,
        policy_id: context.policy_id,
        claim_id,
        category: file.category.clone(),
    }
}

/// Runs one upload and applies its outcome to the shared list.
///
/// If the file was removed while the upload ran, the outcome is dropped.
async fn perform_upload(
    uploader: Arc<dyn DocumentUploader>,
    files: Arc<RwLock<Vec<UploadedFile>>>,
    id: FileId,
    request: UploadRequest,
) {
    let sink: ProgressSink = {
        let files = Arc::clone(&files);
        Arc::new(move |percent| {
            let mut files = files.write().unwrap();
            if let Some(file) = files.iter_mut().find(|f| f.id == id) {
                // Progress is monotonic and never outlives the upload
                if file.uploading && percent > file.progress && percent <= 100 {
                    file.progress = percent;
                }
            }
        })
    };

    match uploader.upload(request, sink).await {
        Ok(response) => {
            let mut files = files.write().unwrap();
            let Some(file) = files.iter_mut().find(|f| f.id == id) else {
                return;
            };
            match response.file_url() {
                Some(url) => {
                    file.uploading = false;
                    file.progress = 100;
                    file.uploaded_url = Some(url.to_string());
                    file.document_id = response.document_id().map(str::to_string);
                    if let Some(corrected) = response.file_name() {
                        file.name = corrected.to_string();
                    }
                    file.error = None;
                    debug!(file_id = %id, "upload succeeded");
                }
                None => {
                    file.uploading = false;
                    file.progress = 0;
                    file.error = Some(UploadFailure::from_raw(
                        "upload response did not include a file URL",
                    ));
                    warn!(file_id = %id, "upload response missing file URL");
                }
            }
        }
        Err(error) => {
            let failure = UploadFailure::from_raw(error.to_string());
            let mut files = files.write().unwrap();
            let Some(file) = files.iter_mut().find(|f| f.id == id) else {
                return;
            };
            file.uploading = false;
            file.progress = 0;
            warn!(file_id = %id, kind = ?failure.kind, "upload failed");
            file.error = Some(failure);
        }
    }
}

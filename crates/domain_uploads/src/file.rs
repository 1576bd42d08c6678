//! The per-file upload record
//!
//! One `UploadedFile` exists per user file selection. The record is owned by
//! the orchestrator's list and mutated only through it, keyed by `FileId` -
//! positional indexes are not stable once removal is allowed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use core_kernel::{DocumentCategory, FileId};

use crate::failure::UploadFailure;

/// Where the file's bytes live on the client
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Contents held in memory (e.g. received over the API)
    Memory(Arc<Vec<u8>>),
    /// Contents on local disk
    Path(PathBuf),
}

/// A file selection as it arrives from the user
#[derive(Debug, Clone)]
pub struct NewFile {
    pub source: FileSource,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub category: DocumentCategory,
}

/// One file in the upload list, with its full lifecycle state
///
/// Created uploading the instant the file is chosen; ends either succeeded
/// (`uploaded_url` set, `error` None) or failed (`error` set, progress back
/// at 0, `uploading` false). Failed files can be retried.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: FileId,
    pub source: FileSource,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub category: DocumentCategory,
    /// Set for image files only, so the UI can show a thumbnail
    pub local_preview: Option<String>,
    /// 0-100; monotonic while uploading
    pub progress: u8,
    pub uploading: bool,
    pub error: Option<UploadFailure>,
    pub uploaded_url: Option<String>,
    /// Server-assigned, opaque
    pub document_id: Option<String>,
}

impl UploadedFile {
    /// Builds the initial record for a fresh selection
    pub fn begin(selection: NewFile) -> Self {
        let id = FileId::new();
        let local_preview = selection
            .mime_type
            .starts_with("image/")
            .then(|| format!("local://preview/{}", id));

        Self {
            id,
            source: selection.source,
            name: selection.name,
            size: selection.size,
            mime_type: selection.mime_type,
            category: selection.category,
            local_preview,
            progress: 0,
            uploading: true,
            error: None,
            uploaded_url: None,
            document_id: None,
        }
    }

    /// True once the upload has completed successfully
    pub fn succeeded(&self) -> bool {
        self.uploaded_url.is_some() && self.error.is_none()
    }

    /// True if the last attempt failed and the file is waiting for a retry
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Read-only view of a file for API responses and summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSnapshot {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub category: DocumentCategory,
    pub local_preview: Option<String>,
    pub progress: u8,
    pub uploading: bool,
    pub error: Option<String>,
    pub uploaded_url: Option<String>,
    pub document_id: Option<String>,
}

impl From<&UploadedFile> for FileSnapshot {
    fn from(file: &UploadedFile) -> Self {
        Self {
            id: file.id,
            name: file.name.clone(),
            size: file.size,
            mime_type: file.mime_type.clone(),
            category: file.category.clone(),
            local_preview: file.local_preview.clone(),
            progress: file.progress,
            uploading: file.uploading,
            error: file.error.as_ref().map(|e| e.user_message().to_string()),
            uploaded_url: file.uploaded_url.clone(),
            document_id: file.document_id.clone(),
        }
    }
}
